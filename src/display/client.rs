//! Client display formatting
//!
//! Formats client records for terminal output in card and table views.
//! Column widths follow the historical layout: account 15, pin 10, name 40,
//! phone 12, balance 12.

use crate::models::ClientRecord;
use crate::services::ledger::total_balance;

const RULE: &str =
    "________________________________________________________________________________________________";

/// Format a single client record as fixed-order label/value pairs
pub fn format_client_card(client: &ClientRecord) -> String {
    let mut output = String::new();
    output.push_str("The following are the client details:\n");
    output.push_str("-----------------------------------\n");
    output.push_str(&format!("Account Number : {}\n", client.account_number));
    output.push_str(&format!("Pin Code       : {}\n", client.pin_code));
    output.push_str(&format!("Name           : {}\n", client.name));
    output.push_str(&format!("Phone          : {}\n", client.phone));
    output.push_str(&format!("Account Balance: {:.2}\n", client.balance));
    output.push_str("-----------------------------------\n");
    output
}

/// Format all client records as a fixed-width table
pub fn format_client_list(clients: &[ClientRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\t\t\t\tClient List ({}) Client(s).\n",
        clients.len()
    ));
    output.push_str(RULE);
    output.push_str("\n\n");

    output.push_str(&format!(
        "| {:<15}| {:<10}| {:<40}| {:<12}| {:<12}\n",
        "Account Number", "Pin Code", "Client Name", "Phone", "Balance"
    ));
    output.push_str(RULE);
    output.push_str("\n\n");

    if clients.is_empty() {
        output.push_str("\t\t\tNo clients available in the system!\n");
    }

    for client in clients {
        output.push_str(&format!(
            "| {:<15}| {:<10}| {:<40}| {:<12}| {:<12.2}\n",
            client.account_number, client.pin_code, client.name, client.phone, client.balance
        ));
    }

    output.push_str(RULE);
    output.push('\n');
    output
}

/// Format the balances table: list minus pin/phone, plus a total row
pub fn format_balances(clients: &[ClientRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\t\t\t\tBalances List ({}) Client(s).\n",
        clients.len()
    ));
    output.push_str(RULE);
    output.push_str("\n\n");

    output.push_str(&format!(
        "| {:<15}| {:<40}| {:<12}\n",
        "Account Number", "Client Name", "Balance"
    ));
    output.push_str(RULE);
    output.push_str("\n\n");

    if clients.is_empty() {
        output.push_str("\t\t\tNo clients available in the system!\n");
    }

    for client in clients {
        output.push_str(&format!(
            "| {:<15}| {:<40}| {:<12.2}\n",
            client.account_number, client.name, client.balance
        ));
    }

    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "\t\t\t\tTotal Balances = {:.2}\n",
        total_balance(clients)
    ));
    output
}
