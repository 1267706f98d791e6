//! Interactive menu loop.
//!
//! Collects raw input, hands already-parsed parameters to the booking
//! manager, and renders the results. Every core error is printed and the
//! loop continues; nothing here terminates the session except `exit` or
//! end of input.

use std::io::{self, Write};
use std::str::FromStr;

use booking::{BookingManager, BookingRequest, Receipt};
use chrono::NaiveDate;
use database::models::BedType;

const MENU: &str = "\nWhat would you like to do?\n\
    1. book\n\
    2. cancel\n\
    3. receipt\n\
    4. available\n\
    5. display\n\
    6. enquiry\n\
    7. exit\n> ";

/// Run the menu loop until the operator exits or input ends.
pub async fn run(manager: &BookingManager) -> io::Result<()> {
    println!("Welcome to the hotel front desk!");

    loop {
        let Some(choice) = ask(MENU)? else { break };
        match choice.as_str() {
            "1" | "book" => book(manager).await?,
            "2" | "cancel" => cancel(manager).await?,
            "3" | "receipt" => receipt(manager).await?,
            "4" | "available" => available(manager).await?,
            "5" | "display" => display(manager).await?,
            "6" | "enquiry" => enquiry(manager)?,
            "7" | "exit" | "quit" => {
                println!("Thank you for using the hotel front desk!");
                break;
            }
            "" => {}
            other => println!("Invalid input '{}'. Please try again.", other),
        }
    }

    Ok(())
}

/// First-run room inventory setup, prompting for counts until they stick.
pub async fn first_run_setup(manager: &BookingManager) -> io::Result<()> {
    if manager.room_info().await.map_err(to_io_error)?.is_some() {
        return Ok(());
    }

    println!("First run: set up the room inventory.");
    loop {
        let Some(total) = ask_parsed::<i64>("Enter total number of rooms: ")? else {
            return Ok(());
        };
        let Some(ac) = ask_parsed::<i64>("Enter total number of AC rooms: ")? else {
            return Ok(());
        };

        match manager.init_room_info(total, ac).await {
            Ok(_) => {
                println!("Room inventory saved.");
                return Ok(());
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}

async fn book(manager: &BookingManager) -> io::Result<()> {
    let Some(room_number) = ask_parsed::<u32>("Enter room number: ")? else {
        return Ok(());
    };
    let Some(check_in_date) = ask_parsed::<NaiveDate>("Enter check-in date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(check_out_date) = ask_parsed::<NaiveDate>("Enter check-out date (YYYY-MM-DD): ")?
    else {
        return Ok(());
    };
    let Some(guest_name) = ask("Enter guest name: ")? else {
        return Ok(());
    };
    let Some(ac) = ask_yes_no("Do you want an AC room? (yes/no): ")? else {
        return Ok(());
    };
    let Some(bed_type) = ask_bed_type("Enter bed type (single/double): ")? else {
        return Ok(());
    };
    let Some(extra_mattress) = ask_yes_no("Do you want an extra mattress? (yes/no): ")? else {
        return Ok(());
    };

    let request = BookingRequest {
        room_number,
        check_in_date,
        check_out_date,
        guest_name,
        ac,
        bed_type,
        extra_mattress,
    };

    match manager.book(request).await {
        Ok(booking) => println!(
            "Room {} booked successfully for {} from {} to {}",
            booking.room_number, booking.guest_name, booking.check_in_date, booking.check_out_date
        ),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

async fn cancel(manager: &BookingManager) -> io::Result<()> {
    let Some(room_number) = ask_parsed::<u32>("Enter room number to cancel booking: ")? else {
        return Ok(());
    };

    match manager.cancel(room_number).await {
        Ok(_) => println!("Booking for room {} canceled successfully", room_number),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

async fn receipt(manager: &BookingManager) -> io::Result<()> {
    let Some(room_number) = ask_parsed::<u32>("Enter room number for receipt: ")? else {
        return Ok(());
    };

    match manager.receipt(room_number).await {
        Ok(receipt) => print!("{}", render_receipt(&receipt)),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

async fn available(manager: &BookingManager) -> io::Result<()> {
    match manager.list_available().await {
        Ok(rooms) if rooms.is_empty() => println!("No rooms available at the moment."),
        Ok(rooms) => println!("Available rooms: {:?}", rooms),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

async fn display(manager: &BookingManager) -> io::Result<()> {
    match manager.list_bookings().await {
        Ok(bookings) if bookings.is_empty() => println!("No bookings found"),
        Ok(bookings) => {
            println!("Current bookings:");
            for b in bookings {
                println!(
                    "Room {}: {} - Check-in: {}, Check-out: {}",
                    b.room_number, b.guest_name, b.check_in_date, b.check_out_date
                );
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

fn enquiry(manager: &BookingManager) -> io::Result<()> {
    let Some(_enquiry) = ask("Enter your enquiry: ")? else {
        return Ok(());
    };
    println!(
        "Customer Care Number: {}",
        manager.profile().care_number
    );
    println!("Thank you for contacting customer care. We will get back to you soon.");
    Ok(())
}

/// Render a receipt the way the printed slip looks.
fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();
    out.push_str("\n===== Receipt for Booking =====\n");
    out.push_str(&format!("Room Number: {}\n", receipt.room_number));
    out.push_str(&format!("Customer Name: {}\n", receipt.guest_name));
    out.push_str(&format!("GST Number: {}\n", receipt.gst_number));
    out.push_str(&format!("Check-in Date: {}\n", receipt.check_in_date));
    out.push_str(&format!("Check-out Date: {}\n", receipt.check_out_date));
    out.push_str(&format!(
        "Nights: {} x {} INR = {} INR\n",
        receipt.nights,
        booking::pricing::ROOM_RATE,
        receipt.base_cost
    ));
    if receipt.ac_surcharge > 0 {
        out.push_str(&format!("AC Room: +{} INR\n", receipt.ac_surcharge));
    }
    if receipt.bed_surcharge > 0 {
        out.push_str(&format!("Double Bed: +{} INR\n", receipt.bed_surcharge));
    }
    if receipt.mattress_surcharge > 0 {
        out.push_str(&format!(
            "Extra Mattress: +{} INR\n",
            receipt.mattress_surcharge
        ));
    }
    out.push_str(&format!("Total Room Cost: {} INR\n", receipt.subtotal));
    out.push_str(&format!("GST (18%): {} INR\n", receipt.gst));
    out.push_str(&format!("Grand Total: {} INR\n", receipt.grand_total));
    out.push_str("\n===== Payment Methods =====\n");
    out.push_str(&format!("UPI ID: {}\n", receipt.upi_id));
    out.push_str(&format!("Phone Number: {}\n", receipt.payment_number));
    out.push_str("\nThank you for choosing our hotel! Visit again soon!\n");
    out
}

/// Prompt and read one trimmed line. `None` means end of input.
fn ask(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a value, printing a message and aborting the operation on a
/// parse failure (the operator is back at the menu, as with any bad input).
fn ask_parsed<T: FromStr>(prompt: &str) -> io::Result<Option<T>> {
    let Some(raw) = ask(prompt)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid input '{}'.", raw);
            Ok(None)
        }
    }
}

/// Prompt for yes/no, re-asking until the answer is one of the two.
fn ask_yes_no(prompt: &str) -> io::Result<Option<bool>> {
    loop {
        let Some(raw) = ask(prompt)? else {
            return Ok(None);
        };
        match parse_yes_no(&raw) {
            Some(answer) => return Ok(Some(answer)),
            None => println!("Invalid input. Please enter 'yes' or 'no'."),
        }
    }
}

/// Prompt for a bed type, re-asking until valid.
fn ask_bed_type(prompt: &str) -> io::Result<Option<BedType>> {
    loop {
        let Some(raw) = ask(prompt)? else {
            return Ok(None);
        };
        match BedType::parse(&raw) {
            Some(bed_type) => return Ok(Some(bed_type)),
            None => println!("Invalid input. Please enter 'single' or 'double'."),
        }
    }
}

fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

fn to_io_error(e: booking::BookingError) -> io::Error {
    io::Error::other(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no(" Y "), Some(true));
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn test_render_receipt_lists_every_figure() {
        let receipt = Receipt {
            room_number: 101,
            guest_name: "Asha".to_string(),
            gst_number: "GST123456789",
            check_in_date: "2024-01-01".parse().unwrap(),
            check_out_date: "2024-01-04".parse().unwrap(),
            nights: 3,
            base_cost: 12_000,
            ac_surcharge: 500,
            bed_surcharge: 800,
            mattress_surcharge: 200,
            subtotal: 13_500,
            gst: 2430.0,
            grand_total: 15_930.0,
            upi_id: "hotel@example.com".to_string(),
            payment_number: "9876543210".to_string(),
        };

        let rendered = render_receipt(&receipt);
        assert!(rendered.contains("Room Number: 101"));
        assert!(rendered.contains("GST Number: GST123456789"));
        assert!(rendered.contains("Total Room Cost: 13500 INR"));
        assert!(rendered.contains("GST (18%): 2430 INR"));
        assert!(rendered.contains("Grand Total: 15930 INR"));
        assert!(rendered.contains("UPI ID: hotel@example.com"));
    }

    #[test]
    fn test_render_receipt_skips_absent_surcharges() {
        let receipt = Receipt {
            room_number: 110,
            guest_name: "Ravi".to_string(),
            gst_number: "GST123456789",
            check_in_date: "2024-02-01".parse().unwrap(),
            check_out_date: "2024-02-03".parse().unwrap(),
            nights: 2,
            base_cost: 8000,
            ac_surcharge: 0,
            bed_surcharge: 0,
            mattress_surcharge: 0,
            subtotal: 8000,
            gst: 1440.0,
            grand_total: 9440.0,
            upi_id: "hotel@example.com".to_string(),
            payment_number: "9876543210".to_string(),
        };

        let rendered = render_receipt(&receipt);
        assert!(!rendered.contains("AC Room"));
        assert!(!rendered.contains("Double Bed"));
        assert!(!rendered.contains("Extra Mattress"));
    }
}
