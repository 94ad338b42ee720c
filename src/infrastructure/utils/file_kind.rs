use serde::Serialize;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Document,
}

impl FileKind {
    /// Decides by the extension of the URL path; query and fragment are ignored.
    pub fn classify(url: &str) -> FileKind {
        let path = match url::Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => url
                .split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        let extension = path
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => FileKind::Image,
            _ => FileKind::Document,
        }
    }

    pub fn is_image(self) -> bool {
        self == FileKind::Image
    }
}
