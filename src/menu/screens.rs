//! Menu screens
//!
//! One function per menu action. Every destructive action shows the client
//! card first and commits only on a `y`/`Y` confirmation; any other answer
//! aborts with no state change.

use crate::display::{format_balances, format_client_card, format_client_list};
use crate::error::TellerResult;
use crate::models::{ClientRecord, ClientUpdate};
use crate::services::{ClientService, LedgerService};
use crate::storage::{find_by_account, ClientStore};

use super::prompt::{confirm, prompt_amount, prompt_balance, prompt_field, prompt_string};

fn screen_header(title: &str) {
    println!();
    println!("-----------------------------------");
    println!("\t{}", title);
    println!("-----------------------------------");
}

fn not_found(account_number: &str) {
    println!(
        "\nClient with Account Number ({}) is Not Found!",
        account_number
    );
}

/// Show the full client list
pub fn list_clients(clients: &[ClientRecord]) -> TellerResult<()> {
    print!("{}", format_client_list(clients));
    Ok(())
}

/// Add a new client, re-prompting while the account number is taken
pub fn add_client(store: &ClientStore, clients: Vec<ClientRecord>) -> TellerResult<()> {
    screen_header("Add New Client Screen");

    let account_number = loop {
        let account_number = prompt_field("Enter Account Number? ")?;
        if find_by_account(&clients, &account_number).is_none() {
            break account_number;
        }
        println!(
            "Client with Account Number [{}] already exists.\n",
            account_number
        );
    };

    let pin_code = prompt_field("Enter PinCode? ")?;
    let name = prompt_field("Enter Name? ")?;
    let phone = prompt_field("Enter Phone? ")?;
    let balance = prompt_balance("Enter Account Balance? ")?;

    let client = ClientRecord::new(account_number, pin_code, name, phone, balance);
    ClientService::new(store).add(clients, client)?;

    println!("\nClient Added Successfully, saved to file.");
    Ok(())
}

/// Delete a client after showing the card and confirming
pub fn delete_client(store: &ClientStore, clients: Vec<ClientRecord>) -> TellerResult<()> {
    screen_header("Delete Client Screen");

    let account_number = prompt_string("Please enter Account Number: ")?;
    let Some(client) = find_by_account(&clients, &account_number) else {
        not_found(&account_number);
        return Ok(());
    };

    print!("{}", format_client_card(client));
    if !confirm("\nAre you sure you want to delete this client? y/n ? ")? {
        println!("\nDelete cancelled, nothing changed.");
        return Ok(());
    }

    ClientService::new(store).delete(clients, &account_number)?;
    println!("\nClient Deleted Successfully.");
    Ok(())
}

/// Update a client's mutable fields after showing the card and confirming
pub fn update_client(store: &ClientStore, clients: Vec<ClientRecord>) -> TellerResult<()> {
    screen_header("Update Client Info Screen");

    let account_number = prompt_string("Please enter Account Number: ")?;
    let Some(client) = find_by_account(&clients, &account_number) else {
        not_found(&account_number);
        return Ok(());
    };

    print!("{}", format_client_card(client));
    if !confirm("\nAre you sure you want to update this client? y/n ? ")? {
        println!("\nUpdate cancelled, nothing changed.");
        return Ok(());
    }

    println!("\nEnter New Client Data:");
    println!("----------------------");
    let update = ClientUpdate {
        pin_code: prompt_field("Enter PinCode? ")?,
        name: prompt_field("Enter Name? ")?,
        phone: prompt_field("Enter Phone? ")?,
        balance: prompt_balance("Enter Account Balance? ")?,
    };

    ClientService::new(store).update(clients, &account_number, update)?;
    println!("\nClient Updated Successfully.");
    Ok(())
}

/// Find a client and show the card
pub fn find_client(clients: &[ClientRecord]) -> TellerResult<()> {
    screen_header("Find Client Screen");

    let account_number = prompt_string("Please enter Account Number: ")?;
    match find_by_account(clients, &account_number) {
        Some(client) => print!("{}", format_client_card(client)),
        None => not_found(&account_number),
    }
    Ok(())
}

/// Deposit into a client's account
pub fn deposit(store: &ClientStore, clients: Vec<ClientRecord>) -> TellerResult<()> {
    screen_header("Deposit Screen");

    let account_number = prompt_string("Please enter Account Number: ")?;
    let Some(client) = find_by_account(&clients, &account_number) else {
        not_found(&account_number);
        return Ok(());
    };

    print!("{}", format_client_card(client));
    let ledger = LedgerService::new(store);

    let amount = prompt_amount("\nPlease enter deposit amount? ")?;
    let candidate = ledger.check_deposit(client, amount)?;

    println!("\nNew balance will be: {:.2}", candidate);
    if !confirm("Are you sure you want to perform this transaction? y/n ? ")? {
        println!("\nTransaction cancelled, nothing changed.");
        return Ok(());
    }

    let (_, new_balance) = ledger.deposit(clients, &account_number, amount)?;
    println!("\nDone Successfully. New balance is: {:.2}", new_balance);
    Ok(())
}

/// Withdraw from a client's account, re-prompting while funds are short
pub fn withdraw(store: &ClientStore, clients: Vec<ClientRecord>) -> TellerResult<()> {
    screen_header("Withdraw Screen");

    let account_number = prompt_string("Please enter Account Number: ")?;
    let Some(client) = find_by_account(&clients, &account_number) else {
        not_found(&account_number);
        return Ok(());
    };

    print!("{}", format_client_card(client));
    let ledger = LedgerService::new(store);

    // Blocking validation loop: an amount above the balance is rejected and
    // re-asked, never clamped or partially applied.
    let (amount, candidate) = loop {
        let amount = prompt_amount("\nPlease enter withdraw amount? ")?;
        match ledger.check_withdrawal(client, amount) {
            Ok(candidate) => break (amount, candidate),
            Err(e) => println!("{}", e),
        }
    };

    println!("\nNew balance will be: {:.2}", candidate);
    if !confirm("Are you sure you want to perform this transaction? y/n ? ")? {
        println!("\nTransaction cancelled, nothing changed.");
        return Ok(());
    }

    let (_, new_balance) = ledger.withdraw(clients, &account_number, amount)?;
    println!("\nDone Successfully. New balance is: {:.2}", new_balance);
    Ok(())
}

/// Show the balances table with the running total
pub fn total_balances(clients: &[ClientRecord]) -> TellerResult<()> {
    print!("{}", format_balances(clients));
    Ok(())
}
