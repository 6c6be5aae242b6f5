//! Command handlers.
//!
//! Each handler takes arguments already checked against the command's
//! arity and returns the reply text shown to the user.

use super::command::Command;
use crate::error::CommandResult;
use crate::services::{AddOutcome, ContactService};

/// Run `command` against the service.
///
/// `Exit` is handled by the session loop, not here.
pub fn dispatch(
    service: &mut ContactService,
    command: Command,
    args: &[&str],
) -> CommandResult<String> {
    let args = command.check_args(args)?;

    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(service, args[0], args[1]),
        Command::Change => change_contact(service, args[0], args[1], args[2]),
        Command::Phone => show_contact(service, args[0]),
        Command::RemovePhone => remove_phone(service, args[0], args[1]),
        Command::Delete => delete_contact(service, args[0]),
        Command::All => Ok(show_all_contacts(service)),
        Command::AddBirthday => add_birthday(service, args[0], args[1]),
        Command::ShowBirthday => show_birthday(service, args[0]),
        Command::Birthdays => Ok(show_all_birthdays(service)),
        Command::NextBirthdays => Ok(show_next_birthdays(service)),
        Command::Help => Ok(help()),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

fn add_contact(service: &mut ContactService, name: &str, phone: &str) -> CommandResult<String> {
    let reply = match service.add_contact(name, phone)? {
        AddOutcome::Created => "Contact added.",
        AddOutcome::PhoneAdded => "New phone added.",
    };
    Ok(reply.to_string())
}

fn change_contact(
    service: &mut ContactService,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    service.change_phone(name, old, new)?;
    Ok("Contact changed.".to_string())
}

fn show_contact(service: &ContactService, name: &str) -> CommandResult<String> {
    Ok(service.find(name)?.to_string())
}

fn remove_phone(service: &mut ContactService, name: &str, phone: &str) -> CommandResult<String> {
    service.remove_phone(name, phone)?;
    Ok("Phone removed.".to_string())
}

fn delete_contact(service: &mut ContactService, name: &str) -> CommandResult<String> {
    service.delete_contact(name)?;
    Ok("Contact deleted.".to_string())
}

fn show_all_contacts(service: &ContactService) -> String {
    if service.book().is_empty() {
        return "No contacts saved.".to_string();
    }

    service
        .book()
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(service: &mut ContactService, name: &str, birthday: &str) -> CommandResult<String> {
    service.add_birthday(name, birthday)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(service: &ContactService, name: &str) -> CommandResult<String> {
    let reply = match service.find(name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => format!("Birthday was not added for contact {}.", name),
    };
    Ok(reply)
}

fn show_all_birthdays(service: &ContactService) -> String {
    let lines: Vec<String> = service
        .book()
        .records()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();

    if lines.is_empty() {
        return "No birthdays saved.".to_string();
    }
    lines.join("\n")
}

fn show_next_birthdays(service: &ContactService) -> String {
    let upcoming = service.upcoming_birthdays();
    if upcoming.is_empty() {
        return "No birthdays in the coming week.".to_string();
    }
    upcoming.to_string()
}

fn help() -> String {
    let width = Command::ALL
        .iter()
        .map(|c| c.usage().len())
        .max()
        .unwrap_or(0);

    Command::ALL
        .iter()
        .map(|c| format!("{:width$}  {}", c.usage(), c.description(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
