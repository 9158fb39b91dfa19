pub mod api_client;
pub mod classifier;
pub mod screens;

pub mod data_structs {
    pub mod notification;
    pub mod session;
    pub mod requests {
        pub mod authenticate_token_request;
        pub mod sign_in_request;
    }
    pub mod responses {
        pub mod sign_in_response;
    }
}

use std::fs::File;
use std::io::{self, Read, Write};

use chrono::Utc;
use yaml_rust::YamlLoader;

use crate::api_client::ApiClient;
use crate::data_structs::session::Session;
use crate::screens::home::HomeScreen;
use crate::screens::sign_in::SignInScreen;
use crate::screens::Snackbar;

pub struct ClientConfig {
    base_url: String,
}

pub fn read_file_as_str(file_path: &str) -> String {
    let mut buf: String = String::new();
    let mut file = File::open(file_path)
        .expect("Error! A config.yml file was not found in the current directory.");
    file.read_to_string(&mut buf).expect("Error reading config.yml!");
    return buf;
}

fn parse_config(raw: &str) -> ClientConfig {
    let config = match YamlLoader::load_from_str(raw) {
        Ok(config) => config,
        Err(_) => panic!("Error loading yml file")
    };
    let config = &config[0];

    let api = &config["api"];
    let base_url = api["base-url"].as_str().expect("api.base-url not found!");

    ClientConfig {
        // a trailing slash would double up in the request paths
        base_url: base_url.trim_end_matches('/').to_string(),
    }
}

fn load() -> ClientConfig {
    println!("Loading configurations...");
    let buf = read_file_as_str("config.yml");
    parse_config(&buf)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return None;
    }
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None
    }
}

fn show_snack(snack: &mut Snackbar) {
    if snack.visible {
        println!("{}", snack.message);
        snack.dismiss();
    }
}

fn render_pending(home: &HomeScreen) {
    println!("-- Pending --");
    if home.pending.is_empty() {
        println!("No pending notifications");
        return;
    }
    for (row, notification) in home.pending.iter().enumerate() {
        println!("[{}] {} (type 'confirm {}' to authenticate)",
                 row + 1, notification.created_at_utc_string(), row + 1);
    }
}

fn render_history(home: &HomeScreen) {
    println!("-- History --");
    for notification in &home.history {
        println!("License plate {} ({})",
                 notification.message, notification.created_at_utc_string());
    }
}

async fn run_sign_in(api: &ApiClient) -> Option<(Session, HomeScreen)> {
    let mut screen = SignInScreen::new();
    println!("Sign in. Type 'account' if you don't have one, 'quit' to exit.");
    loop {
        let email = prompt("Email: ")?;
        match email.as_str() {
            "quit" => return None,
            "account" => {
                println!("Access the admin website to create an account:");
                println!("plate-administrator.herokuapp.com");
                continue;
            }
            _ => {}
        }
        screen.email = email;
        screen.password = prompt("Password: ")?;

        match screen.submit(api, now_millis()).await {
            Some(navigation) => return Some(navigation),
            None => show_snack(&mut screen.snack)
        }
    }
}

async fn run_confirmation(api: &ApiClient, session: &Session, home: &mut HomeScreen, index_arg: Option<&str>) {
    let row = match index_arg.and_then(|raw| raw.parse::<usize>().ok()) {
        Some(number) if number >= 1 => number,
        _ => {
            println!("Usage: confirm <pending row number>");
            return;
        }
    };
    if !home.open_dialog(row - 1) {
        println!("No pending notification at row {}", row);
        return;
    }

    if let Some(dialog) = home.dialog.as_ref() {
        println!("License plate: {}", dialog.notification.message);
        println!("Detected at: {}", dialog.notification.created_at_utc_string());
    }
    let password = match prompt("Type password to confirm: ") {
        Some(password) => password,
        None => {
            home.dismiss_dialog();
            return;
        }
    };
    if let Some(dialog) = home.dialog.as_mut() {
        dialog.password = password;
    }

    if home.submit_confirmation(api, session, now_millis()).await {
        println!("Confirmed.");
        render_pending(home);
    }
    show_snack(&mut home.snack);
}

/// Runs the notification screen until the user signs out or quits.
/// Returns true when the whole app should exit.
async fn run_home(api: &ApiClient, session: &Session, home: &mut HomeScreen) -> bool {
    println!("Notifications");
    render_pending(home);
    println!("Commands: pending, history, refresh, confirm <n>, signout, quit");
    loop {
        let input = match prompt("> ") {
            Some(input) => input,
            None => return true
        };
        let mut parts = input.split_whitespace();
        match parts.next() {
            Some("pending") => render_pending(home),
            Some("history") => render_history(home),
            Some("refresh") => {
                home.refresh(api, session, now_millis()).await;
                render_pending(home);
                render_history(home);
            }
            Some("confirm") => run_confirmation(api, session, home, parts.next()).await,
            Some("signout") => {
                match prompt("Are you sure you want to sign out? (yes/no) ") {
                    Some(answer) if answer == "yes" => return false,
                    Some(_) => {}
                    None => return true
                }
            }
            Some("quit") => return true,
            Some(_) => println!("Commands: pending, history, refresh, confirm <n>, signout, quit"),
            None => {}
        }
    }
}

// everything here is request -> response sequential, one thread is plenty
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let config = load();
    let api = ApiClient::new(config.base_url);

    println!("Plate Recognizer");
    loop {
        let (session, mut home) = match run_sign_in(&api).await {
            Some(navigation) => navigation,
            None => break
        };
        if run_home(&api, &session, &mut home).await {
            break;
        }
        // signed out: the session (and its token) is dropped right here
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_reads_the_base_url() {
        let config = parse_config("api:\n  base-url: https://plate-notifications.herokuapp.com\n");
        assert_eq!(config.base_url, "https://plate-notifications.herokuapp.com");
    }

    #[test]
    fn test_parse_config_trims_trailing_slashes() {
        let config = parse_config("api:\n  base-url: http://localhost:3000/\n");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    #[should_panic(expected = "api.base-url not found!")]
    fn test_parse_config_panics_without_a_base_url() {
        parse_config("api:\n  timeout: 5\n");
    }
}
