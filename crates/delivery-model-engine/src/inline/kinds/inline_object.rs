/// An inline content item object embedded in rich text:
///
/// `<object type="application/kenticocloud" data-type="item" data-codename="x"></object>`
pub struct InlineObject;

impl InlineObject {
    pub const OPEN: &'static [u8; 7] = b"<object";
    pub const CLOSE: &'static [u8; 8] = b"</object";
    pub const TAG_START: u8 = b'<';
    pub const TAG_END: u8 = b'>';
    pub const SELF_CLOSE: &'static [u8; 2] = b"/>";

    pub const TYPE_ATTR: &'static str = "type";
    pub const TYPE_VALUE: &'static str = "application/kenticocloud";
    pub const DATA_TYPE_ATTR: &'static str = "data-type";
    pub const DATA_TYPES: [&'static str; 2] = ["item", "component"];
    pub const CODENAME_ATTR: &'static str = "data-codename";

    /// Whether `b` may follow the tag name, so `<objects>` is not an object.
    pub fn ends_tag_name(b: Option<u8>) -> bool {
        match b {
            None => true,
            Some(b) => b.is_ascii_whitespace() || b == Self::TAG_END || b == b'/',
        }
    }
}
