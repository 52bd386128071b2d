/// A file picked in the browser, ready to upload.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
