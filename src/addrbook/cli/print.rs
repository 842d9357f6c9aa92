use addrbook::api::{BirthdayEntry, CmdMessage, MessageLevel};
use addrbook::model::Contact;
use colored::Colorize;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_contact(contact: &Contact) {
    println!("{}", contact.name().to_string().bold());
    if contact.phones().is_empty() {
        println!("  {}", "no phones".dimmed());
    }
    for phone in contact.phones() {
        println!("  {}", phone);
    }
    if let Some(birthday) = contact.birthday() {
        println!("  {} {}", "birthday".dimmed(), birthday);
    }
}

pub fn print_contacts(contacts: &[Contact]) {
    for contact in contacts {
        print_contact(contact);
    }
}

pub fn print_pages(pages: &[Vec<Contact>]) {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("Page {}/{}", i + 1, total).yellow());
        print_contacts(page);
    }
}

pub fn print_birthdays(entries: &[BirthdayEntry]) {
    for entry in entries {
        let when = match entry.days {
            0 => "today".green().to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!("{:<24} {}", entry.name, when);
    }
}

pub fn print_config(entries: &[(String, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}
