//! Generators for valid field values and whole applications.

#![allow(dead_code)]

use proptest::prelude::*;

use cinterns::domain::value_objects::{
    Company, Contact, Date, Email, Field, InterviewDate, InterviewTime, Location, Position, Round,
};
use cinterns::{Application, Interview};

pub fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 &.,()-]{0,20}".prop_map(|s| s.trim_end().to_string())
}

pub fn contact() -> impl Strategy<Value = String> {
    "[0-9]{3,15}"
}

pub fn email() -> impl Strategy<Value = String> {
    "[a-z0-9]([a-z0-9._+-]{0,8}[a-z0-9])?@([a-z0-9]{1,6}\\.){0,2}[a-z]{2,6}"
}

pub fn iso_date() -> impl Strategy<Value = String> {
    (1990i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

pub fn time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

pub fn interview() -> impl Strategy<Value = Interview> {
    (text(), iso_date(), time(), text()).prop_map(|(round, date, time, location)| {
        Interview::new(
            Round::parse(&round).unwrap(),
            InterviewDate::parse(&date).unwrap(),
            InterviewTime::parse(&time).unwrap(),
            Location::parse(&location).unwrap(),
        )
    })
}

pub fn application() -> impl Strategy<Value = Application> {
    (
        text(),
        contact(),
        email(),
        text(),
        iso_date(),
        proptest::collection::vec(interview(), 0..4),
    )
        .prop_map(|(company, contact, email, position, date, interviews)| {
            Application::new(
                Company::parse(&company).unwrap(),
                Contact::parse(&contact).unwrap(),
                Email::parse(&email).unwrap(),
                Position::parse(&position).unwrap(),
                Date::parse(&date).unwrap(),
            )
            .with_interviews(interviews)
        })
}
