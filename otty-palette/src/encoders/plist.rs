//! XML property list envelope shared by the Apple terminal formats.

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

const PLIST_DOCTYPE: &str = "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">";

/// Write the declaration, doctype and the opening of the root `<dict>`.
pub(crate) fn open(out: &mut String) {
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(PLIST_DOCTYPE);
    out.push('\n');
    out.push_str("<plist version=\"1.0\">\n");
    out.push_str("<dict>\n");
}

/// Close the root `<dict>` and the document.
pub(crate) fn close(out: &mut String) {
    out.push_str("</dict>\n");
    out.push_str("</plist>\n");
}

/// Single-line document header used inside archived objects.
pub(crate) fn inline_header() -> String {
    format!("{XML_DECLARATION}{PLIST_DOCTYPE}<plist version=\"1.0\">")
}
