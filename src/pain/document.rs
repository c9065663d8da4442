use super::batch::build_payment_information;
use super::tree::{Element, Node};
use super::writer::{Declaration, write_document};
use super::{GROUPING, XML_ENCODING, XML_VERSION, XSI_NAMESPACE, XSI_XMLS, party};
use crate::core::*;

/// A fully assembled pain message, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainDocument {
    pub declaration: Declaration,
    pub schema: SchemaVersion,
    /// The `Document` element, carrying the namespace attributes.
    pub root: Element,
}

impl PainDocument {
    /// Tag of the document element.
    pub const ROOT_TAG: &'static str = "Document";

    /// The message element (`CstmrCdtTrfInitn` or `CstmrDrctDbtInitn`).
    pub fn message(&self) -> Option<&Element> {
        self.root
            .get(self.schema.family.root_element())
            .and_then(Node::as_element)
    }

    /// Serialize to XML text, indenting by two spaces when `pretty`.
    pub fn to_xml(&self, pretty: bool) -> Result<String, SepaError> {
        let indent = pretty.then_some(2);
        write_document(&self.declaration, Self::ROOT_TAG, &self.root, indent)
    }
}

/// Assemble the complete pain tree for `document`.
///
/// Validation runs in document order (message id, initiator name, then
/// each batch and its payments), so the first violation is the one
/// reported.
pub fn build_pain_document(document: &SepaDocument) -> Result<PainDocument, SepaError> {
    let schema = resolve(document.pain_version())?;

    check_length(&document.id, "id", MAX_ID_LENGTH)?;
    check_length(
        &document.initiator_name,
        "initiator_name",
        MAX_PARTY_NAME_LENGTH,
    )?;

    let mut header = Element::new()
        .child("MsgId", document.id.as_str())
        .child("CreDtTm", format_date_time(document.creation_date_time));
    if schema.has_group_batch_booking() {
        header = header.child(
            "BtchBookg",
            document.batch_booking.unwrap_or(false).to_string(),
        );
    }
    header = header
        .child("NbOfTxs", document.number_of_transactions().to_string())
        .child("CtrlSum", format_amount(document.control_sum()?)?);
    if schema.has_group_batch_booking() {
        header = header.child("Grpg", GROUPING);
    }
    header = header.child("InitgPty", party(&document.initiator_name));

    let payment_information = document
        .batches
        .iter()
        .enumerate()
        .map(|(i, batch)| build_payment_information(document, batch, i, schema).map(Node::from))
        .collect::<Result<Vec<_>, _>>()?;

    let options = &document.xml_options;
    let pain = schema.version.as_str();
    let xmlns = options.xsi_xmlns.as_deref().unwrap_or(XSI_XMLS);
    let xsi = options.xsi_namespace.as_deref().unwrap_or(XSI_NAMESPACE);

    let message = Element::new()
        .child("GrpHdr", header)
        .child("PmtInf", Node::Repeated(payment_information));
    let root = Element::new()
        .attr("xmlns", format!("{xmlns}{pain}"))
        .attr("xmlns:xsi", xsi)
        .attr("xsi:schemaLocation", format!("{xmlns}{pain} {pain}.xsd"))
        .child(schema.family.root_element(), message);

    let declaration = Declaration {
        version: options
            .xml_version
            .clone()
            .unwrap_or_else(|| XML_VERSION.to_string()),
        encoding: options
            .xml_encoding
            .clone()
            .unwrap_or_else(|| XML_ENCODING.to_string()),
    };

    tracing::debug!(
        message_id = document.id.as_str(),
        version = pain,
        batches = document.batches.len(),
        transactions = document.number_of_transactions(),
        "assembled pain document"
    );

    Ok(PainDocument {
        declaration,
        schema,
        root,
    })
}

/// Build and serialize `document` in one call.
pub fn to_pain_xml(document: &SepaDocument, pretty: bool) -> Result<String, SepaError> {
    build_pain_document(document)?.to_xml(pretty)
}
