//! `edit INDEX [c/COMPANY] [ct/CONTACT] [e/EMAIL] [p/POSITION] [d/DATE]`

use super::syntax::{
    Prefix, APPLICATION_PREFIXES, PREFIX_COMPANY, PREFIX_CONTACT, PREFIX_DATE, PREFIX_EMAIL,
    PREFIX_POSITION,
};
use super::{index, tokenize, ArgumentMultimap, ParseError};
use crate::commands::{Command, EditApplicationDescriptor, EditCommand};
use crate::domain::value_objects::{Company, Contact, Date, Email, Field, Position};

pub(super) fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &APPLICATION_PREFIXES);
    let index = index::parse_required(map.preamble(), EditCommand::USAGE)?;

    let descriptor = EditApplicationDescriptor {
        company: optional::<Company>(&map, PREFIX_COMPANY)?,
        contact: optional::<Contact>(&map, PREFIX_CONTACT)?,
        email: optional::<Email>(&map, PREFIX_EMAIL)?,
        position: optional::<Position>(&map, PREFIX_POSITION)?,
        date: optional::<Date>(&map, PREFIX_DATE)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

fn optional<F: Field>(map: &ArgumentMultimap, prefix: Prefix) -> Result<Option<F>, ParseError> {
    map.value(prefix)
        .map(F::parse)
        .transpose()
        .map_err(ParseError::from)
}
