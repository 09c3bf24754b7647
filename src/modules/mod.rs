pub mod health;
pub mod invoices;
pub mod printing;
pub mod taxes;
