//! `add c/COMPANY ct/CONTACT e/EMAIL p/POSITION d/DATE`

use super::syntax::{
    APPLICATION_PREFIXES, PREFIX_COMPANY, PREFIX_CONTACT, PREFIX_DATE, PREFIX_EMAIL,
    PREFIX_POSITION,
};
use super::{required_value, tokenize, ParseError};
use crate::commands::{AddCommand, Command};
use crate::domain::entities::Application;
use crate::domain::value_objects::{Company, Contact, Date, Email, Field, Position};

pub(super) fn parse(args: &str) -> Result<Command, ParseError> {
    let usage = AddCommand::USAGE;
    let map = tokenize(args, &APPLICATION_PREFIXES);

    if !map.are_present(&APPLICATION_PREFIXES) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }

    let company = Company::parse(required_value(&map, PREFIX_COMPANY, usage)?)?;
    let contact = Contact::parse(required_value(&map, PREFIX_CONTACT, usage)?)?;
    let email = Email::parse(required_value(&map, PREFIX_EMAIL, usage)?)?;
    let position = Position::parse(required_value(&map, PREFIX_POSITION, usage)?)?;
    let date = Date::parse(required_value(&map, PREFIX_DATE, usage)?)?;

    let application = Application::new(company, contact, email, position, date);
    Ok(Command::Add(AddCommand::new(application)))
}
