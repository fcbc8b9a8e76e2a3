//! Interactive menu UI
//!
//! The main menu and transactions submenu, modeled as closed enums that are
//! only constructed via validated parsing. Each menu cycle reloads the full
//! record snapshot from storage, so external changes between operations are
//! picked up and the previous in-memory state is discarded.

pub mod prompt;
pub mod screens;

use crate::error::{TellerError, TellerResult};
use crate::storage::ClientStore;

use prompt::prompt_string;

/// Main menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    ListClients,
    AddClient,
    DeleteClient,
    UpdateClient,
    FindClient,
    Transactions,
    Exit,
}

impl MainMenu {
    /// Parse a menu selection; anything outside 1..=7 is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::ListClients),
            "2" => Some(Self::AddClient),
            "3" => Some(Self::DeleteClient),
            "4" => Some(Self::UpdateClient),
            "5" => Some(Self::FindClient),
            "6" => Some(Self::Transactions),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Transactions submenu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionsMenu {
    Deposit,
    Withdraw,
    TotalBalances,
    MainMenu,
}

impl TransactionsMenu {
    /// Parse a submenu selection; anything outside 1..=4 is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Deposit),
            "2" => Some(Self::Withdraw),
            "3" => Some(Self::TotalBalances),
            "4" => Some(Self::MainMenu),
            _ => None,
        }
    }
}

/// Run the main menu loop until the operator exits
pub fn run(store: &ClientStore) -> TellerResult<()> {
    loop {
        println!();
        println!("===========================================");
        println!("\t\tMain Menu Screen");
        println!("===========================================");
        println!("\t[1] Show Client List.");
        println!("\t[2] Add New Client.");
        println!("\t[3] Delete Client.");
        println!("\t[4] Update Client Info.");
        println!("\t[5] Find Client.");
        println!("\t[6] Transactions.");
        println!("\t[7] Exit.");
        println!("===========================================");

        let choice = loop {
            let input = prompt_string("Choose what do you want to do? [1 to 7]: ")?;
            match MainMenu::parse(&input) {
                Some(choice) => break choice,
                None => println!("Invalid choice, please enter a number from 1 to 7."),
            }
        };

        if choice == MainMenu::Exit {
            println!();
            println!("-------------------------------------------");
            println!("\t\tProgram Ends :-)");
            println!("-------------------------------------------");
            return Ok(());
        }

        // Fresh snapshot at the top of every cycle; the previous in-memory
        // state is discarded entirely.
        let clients = match store.load() {
            Ok(clients) => clients,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result = match choice {
            MainMenu::ListClients => screens::list_clients(&clients),
            MainMenu::AddClient => screens::add_client(store, clients),
            MainMenu::DeleteClient => screens::delete_client(store, clients),
            MainMenu::UpdateClient => screens::update_client(store, clients),
            MainMenu::FindClient => screens::find_client(&clients),
            MainMenu::Transactions => run_transactions(store),
            MainMenu::Exit => unreachable!(),
        };

        // Recoverable errors are reported once; control returns to the menu
        // with the session still running.
        if let Err(e) = result {
            match e {
                TellerError::Io(_) => return Err(e),
                _ => println!("{}", e),
            }
        }
    }
}

/// Run the transactions submenu loop until the operator goes back
fn run_transactions(store: &ClientStore) -> TellerResult<()> {
    loop {
        println!();
        println!("===========================================");
        println!("\t\tTransactions Menu Screen");
        println!("===========================================");
        println!("\t[1] Deposit.");
        println!("\t[2] Withdraw.");
        println!("\t[3] Total Balances.");
        println!("\t[4] Main Menu.");
        println!("===========================================");

        let choice = loop {
            let input = prompt_string("Choose what do you want to do? [1 to 4]: ")?;
            match TransactionsMenu::parse(&input) {
                Some(choice) => break choice,
                None => println!("Invalid choice, please enter a number from 1 to 4."),
            }
        };

        if choice == TransactionsMenu::MainMenu {
            return Ok(());
        }

        let clients = match store.load() {
            Ok(clients) => clients,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result = match choice {
            TransactionsMenu::Deposit => screens::deposit(store, clients),
            TransactionsMenu::Withdraw => screens::withdraw(store, clients),
            TransactionsMenu::TotalBalances => screens::total_balances(&clients),
            TransactionsMenu::MainMenu => unreachable!(),
        };

        if let Err(e) = result {
            match e {
                TellerError::Io(_) => return Err(e),
                _ => println!("{}", e),
            }
        }
    }
}
