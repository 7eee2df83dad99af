use crate::color::Color;

pub const HTML_FILENAME: &str = "favicon.html";

/// Names the snippet links to. Filenames already carry the prefix.
pub struct HtmlLinks<'a> {
    pub ico: &'a str,
    pub png_32: &'a str,
    pub png_16: &'a str,
    pub apple_touch: &'a str,
    pub manifest: &'a str,
}

/// Render the `<head>` snippet. Every href is root-relative.
pub fn render(links: &HtmlLinks<'_>, theme_color: Color) -> String {
    format!(
        "<!-- Favicon -->\n\
         <link rel=\"icon\" type=\"image/x-icon\" href=\"/{ico}\">\n\
         <link rel=\"icon\" type=\"image/png\" sizes=\"32x32\" href=\"/{png_32}\">\n\
         <link rel=\"icon\" type=\"image/png\" sizes=\"16x16\" href=\"/{png_16}\">\n\
         \n\
         <!-- Apple Touch Icon -->\n\
         <link rel=\"apple-touch-icon\" sizes=\"180x180\" href=\"/{apple}\">\n\
         \n\
         <!-- Android Chrome -->\n\
         <link rel=\"manifest\" href=\"/{manifest}\">\n\
         <meta name=\"theme-color\" content=\"{theme}\">\n",
        ico = links.ico,
        png_32 = links.png_32,
        png_16 = links.png_16,
        apple = links.apple_touch,
        manifest = links.manifest,
        theme = theme_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_every_file() {
        let links = HtmlLinks {
            ico: "a-favicon.ico",
            png_32: "a-favicon-32x32.png",
            png_16: "a-favicon-16x16.png",
            apple_touch: "a-apple-touch-icon.png",
            manifest: "manifest.json",
        };
        let html = render(&links, Color::new(0, 0x80, 0xff));

        assert!(html.contains("href=\"/a-favicon.ico\""));
        assert!(html.contains("sizes=\"32x32\" href=\"/a-favicon-32x32.png\""));
        assert!(html.contains("sizes=\"16x16\" href=\"/a-favicon-16x16.png\""));
        assert!(html.contains("rel=\"apple-touch-icon\" sizes=\"180x180\" href=\"/a-apple-touch-icon.png\""));
        assert!(html.contains("rel=\"manifest\" href=\"/manifest.json\""));
        assert!(html.contains("content=\"#0080ff\""));
        assert_eq!(html.matches("<link ").count(), 5);
    }
}
