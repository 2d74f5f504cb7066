//! `interview INDEX r/ROUND d/INTERVIEW_DATE t/INTERVIEW_TIME l/LOCATION`

use super::syntax::{
    INTERVIEW_PREFIXES, PREFIX_INTERVIEW_DATE, PREFIX_INTERVIEW_TIME, PREFIX_LOCATION,
    PREFIX_ROUND,
};
use super::{index, required_value, tokenize, ParseError};
use crate::commands::{Command, InterviewCommand};
use crate::domain::entities::Interview;
use crate::domain::value_objects::{Field, InterviewDate, InterviewTime, Location, Round};

pub(super) fn parse(args: &str) -> Result<Command, ParseError> {
    let usage = InterviewCommand::USAGE;
    let map = tokenize(args, &INTERVIEW_PREFIXES);

    if !map.are_present(&INTERVIEW_PREFIXES) {
        return Err(ParseError::InvalidFormat { usage });
    }
    let index = index::parse_required(map.preamble(), usage)?;

    let round = Round::parse(required_value(&map, PREFIX_ROUND, usage)?)?;
    let interview_date =
        InterviewDate::parse(required_value(&map, PREFIX_INTERVIEW_DATE, usage)?)?;
    let interview_time =
        InterviewTime::parse(required_value(&map, PREFIX_INTERVIEW_TIME, usage)?)?;
    let location = Location::parse(required_value(&map, PREFIX_LOCATION, usage)?)?;

    let interview = Interview::new(round, interview_date, interview_time, location);
    Ok(Command::Interview(InterviewCommand::new(index, interview)))
}
