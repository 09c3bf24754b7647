use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Shop details printed on the invoice header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub address: Option<String>,
    /// Home state, compared against the invoice's state of supply for GST
    pub state: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub bank: Option<BankDetails>,
    pub footer: String,
    pub terms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
    pub branch: Option<String>,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "JewelBill Pro".to_string(),
            address: None,
            state: None,
            phone: None,
            email: None,
            gst_number: None,
            pan_number: None,
            bank: None,
            footer: "Thank you for your business!".to_string(),
            terms: None,
        }
    }
}

impl BusinessProfile {
    pub fn from_env() -> Self {
        // Bank block is printed only when the essentials are all present
        let bank = match (
            env_opt("BANK_NAME"),
            env_opt("BANK_ACCOUNT"),
            env_opt("BANK_IFSC"),
        ) {
            (Some(bank_name), Some(account_number), Some(ifsc)) => Some(BankDetails {
                bank_name,
                account_number,
                ifsc,
                branch: env_opt("BANK_BRANCH"),
            }),
            _ => None,
        };

        Self {
            name: env_or("BUSINESS_NAME", "JewelBill Pro"),
            address: env_opt("BUSINESS_ADDRESS"),
            state: env_opt("BUSINESS_STATE"),
            phone: env_opt("BUSINESS_PHONE"),
            email: env_opt("BUSINESS_EMAIL"),
            gst_number: env_opt("BUSINESS_GSTIN"),
            pan_number: env_opt("BUSINESS_PAN"),
            bank,
            footer: env_or("INVOICE_FOOTER", "Thank you for your business!"),
            terms: env_opt("TERMS_CONDITIONS"),
        }
    }
}
