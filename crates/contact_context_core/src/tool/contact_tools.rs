//! Tool advertisement for the contact lookup service.

use crate::repo::address_repo::AddressRepository;
use crate::repo::contact_repo::ContactRepository;
use crate::service::contact_context_service::ContactContextService;
use crate::tool::{ToolDefinition, ToolProvider, ToolRegistryError, ToolResult};
use serde_json::{json, Value};

pub const GET_CONTACT_INFO: &str = "getContactInfo";
pub const GET_CONTACT_ADDRESSES: &str = "getContactAddresses";

const GET_CONTACT_INFO_DESCRIPTION: &str =
    "Retrieves a contact's full details (name, email, phone) by email address.";
const GET_CONTACT_ADDRESSES_DESCRIPTION: &str =
    "Retrieves a list of addresses (street, city, zip code) for a contact using their ID.";

impl<C: ContactRepository, A: AddressRepository> ToolProvider for ContactContextService<C, A> {
    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GET_CONTACT_INFO.to_string(),
                description: GET_CONTACT_INFO_DESCRIPTION.to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "email": {
                            "type": "string",
                            "description": "Exact email address of the contact"
                        }
                    },
                    "required": ["email"]
                }),
            },
            ToolDefinition {
                name: GET_CONTACT_ADDRESSES.to_string(),
                description: GET_CONTACT_ADDRESSES_DESCRIPTION.to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "contactId": {
                            "type": "integer",
                            "description": "Identifier of the contact"
                        }
                    },
                    "required": ["contactId"]
                }),
            },
        ]
    }

    fn call_tool(&self, name: &str, arguments: &Value) -> ToolResult<Value> {
        match name {
            GET_CONTACT_INFO => {
                let email = arguments
                    .get("email")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ToolRegistryError::invalid_arguments(name, "`email` must be a string")
                    })?;
                let contact = self
                    .get_contact_info(email)
                    .map_err(|err| ToolRegistryError::handler(name, err))?;
                serde_json::to_value(contact).map_err(|err| ToolRegistryError::handler(name, err))
            }
            GET_CONTACT_ADDRESSES => {
                let contact_id = arguments
                    .get("contactId")
                    .and_then(Value::as_i64)
                    .ok_or_else(|| {
                        ToolRegistryError::invalid_arguments(name, "`contactId` must be an integer")
                    })?;
                let addresses = self
                    .get_contact_addresses(contact_id)
                    .map_err(|err| ToolRegistryError::handler(name, err))?;
                serde_json::to_value(addresses)
                    .map_err(|err| ToolRegistryError::handler(name, err))
            }
            other => Err(ToolRegistryError::UnknownTool(other.to_string())),
        }
    }
}
