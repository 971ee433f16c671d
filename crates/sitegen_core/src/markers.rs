use std::fmt;

/// A literal substring every generated document must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Doctype,
    HtmlOpen,
    HeadOpen,
    BodyOpen,
    HtmlClose,
}

impl Marker {
    /// All required markers, in document order.
    pub const ALL: [Marker; 5] = [
        Marker::Doctype,
        Marker::HtmlOpen,
        Marker::HeadOpen,
        Marker::BodyOpen,
        Marker::HtmlClose,
    ];

    pub const fn literal(self) -> &'static str {
        match self {
            Marker::Doctype => "<!DOCTYPE html>",
            Marker::HtmlOpen => "<html",
            Marker::HeadOpen => "<head",
            Marker::BodyOpen => "<body",
            Marker::HtmlClose => "</html>",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
