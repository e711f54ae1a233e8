use crate::domain::DialAction;
use crate::transport::xml::request_document;

pub const DIAL_PATH: &str = "/api/dialup/dial";

pub fn encode_dial_body(action: DialAction) -> String {
    request_document(&format!("<{0}>{1}</{0}>", DialAction::FIELD, action.code()))
}
