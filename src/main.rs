use std::io::Write as _;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use laundry_client::api::ApiClient;
use laundry_client::config::Config;
use laundry_client::error::ClientError;
use laundry_client::models::booking::BookingForm;
use laundry_client::session::FileStore;
use laundry_client::ui::controller::Controller;
use laundry_client::ui::notifications::NotificationKind;
use laundry_client::ui::tracking::STEP_LABELS;
use laundry_client::ui::{Header, Modal};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    tracing::info!(api_base_url = %config.api_base_url, "laundry client started");

    let api = ApiClient::new(config.api_base_url.clone())?;
    let store = FileStore::new(config.session_path.clone());
    let mut controller = Controller::new(api, store);

    println!("Commands: book, track [id], login, signup, logout, quit");

    loop {
        render(&mut controller);

        let Some(line) = prompt("> ") else { break };
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("book") => {
                let mut form = read_booking_form();
                controller.submit_booking(&mut form).await;
            }
            Some("track") => {
                let order_id = match parts.next() {
                    Some(id) => id.to_string(),
                    None => prompt("Order ID: ").unwrap_or_default(),
                };
                controller.track_order(&order_id).await;
            }
            Some("login") => {
                controller.open_modal(Modal::Login);
                let Some(email) = prompt_required("Email: ") else {
                    controller.backdrop_click();
                    continue;
                };
                let Some(password) = prompt_required("Password: ") else {
                    controller.backdrop_click();
                    continue;
                };
                controller.login(&email, &password).await;
            }
            Some("signup") => {
                controller.open_modal(Modal::Signup);
                let fields = [
                    prompt_required("Name: "),
                    prompt_required("Email: "),
                    prompt_required("Phone: "),
                    prompt_required("Password: "),
                ];
                match fields {
                    [Some(name), Some(email), Some(phone), Some(password)] => {
                        controller.signup(&name, &email, &phone, &password).await;
                    }
                    _ => controller.backdrop_click(),
                }
            }
            Some("logout") => controller.logout().await,
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn read_booking_form() -> BookingForm {
    BookingForm {
        service_type: prompt("Service (laundry/ironing/dry-cleaning): ").unwrap_or_default(),
        items: prompt("Items: ").unwrap_or_default(),
        express_service: prompt("Express service (true/false): ").unwrap_or_default(),
        pickup_date: prompt("Pickup date (YYYY-MM-DD): ").unwrap_or_default(),
        pickup_time: prompt("Pickup time (HH:MM): ").unwrap_or_default(),
        address: prompt("Address: ").unwrap_or_default(),
        phone: prompt("Phone: ").unwrap_or_default(),
        payment_method: prompt("Payment (cash/upi/card): ").unwrap_or_default(),
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt_required(label: &str) -> Option<String> {
    prompt(label).filter(|value| !value.is_empty())
}

fn render(controller: &mut Controller<FileStore>) {
    controller.ui.notifications.prune(Utc::now());

    match &controller.ui.header {
        Header::LoggedIn { name } => println!("[Welcome, {name}]"),
        Header::LoggedOut => println!("[Login | Sign Up]"),
    }

    for notification in controller.ui.notifications.iter() {
        let tag = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        println!("({tag}) {}", notification.message);
    }

    if let Some(panel) = &controller.ui.tracking {
        let bar: Vec<String> = panel
            .steps
            .iter()
            .zip(STEP_LABELS)
            .map(|(active, label)| {
                if *active {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();
        println!("{}", bar.join(" -> "));

        let order = &panel.order;
        println!(
            "Order ID: {} | Service: {} | Items: {} | Pickup Date: {} | Status: {}",
            order.order_id, order.service_type, order.items, order.pickup_date, order.status
        );
    }
}
