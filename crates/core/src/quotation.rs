use std::fmt::{Display, Formatter};

/// Identifier assigned to a quotation by the store.
pub type QuotationId = i32;

/// A single registered quotation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Quotation {
    pub id: QuotationId,
    pub content: String,
    pub author_name: String,
}

impl Display for Quotation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} / {} / {}",
            self.id, self.content, self.author_name
        )
    }
}
