use serde::{Deserialize, Serialize};

/// Customer account. Credit clients carry a spending limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_credit_client: bool,
    #[serde(default)]
    pub credit_limit: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    pub is_credit_client: bool,
    pub credit_limit: Option<f64>,
}

impl ClientDto {
    pub fn from_record(c: &Client) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            contact_phone: c.contact_phone.clone().unwrap_or_default(),
            contact_email: c.contact_email.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
            is_credit_client: c.is_credit_client,
            credit_limit: c.credit_limit,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.is_credit_client && self.credit_limit.unwrap_or(0.0) <= 0.0 {
            return Err("Credit clients need a positive credit limit".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_client_requires_limit() {
        let dto = ClientDto {
            name: "Acme".into(),
            is_credit_client: true,
            credit_limit: None,
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = ClientDto {
            credit_limit: Some(500.0),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
