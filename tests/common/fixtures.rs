//! Reusable command lines and data files.

pub const ADD_GOOGLE: &[&str] = &[
    "add",
    "c/Google",
    "ct/85355255",
    "e/google@gmail.com",
    "p/Software",
    "Engineer",
    "d/2022-01-01",
];

pub const ADD_META: &[&str] = &[
    "add",
    "c/Meta",
    "ct/91234567",
    "e/careers@meta.com",
    "p/Data Analyst",
    "d/2022-02-14",
];

/// One application with one interview
pub const ONE_APPLICATION_JSON: &str = r#"{
  "applications": [
    {
      "company": "Shopee",
      "contact": "61234567",
      "email": "hr@shopee.sg",
      "position": "Backend Intern",
      "date": "2022-03-01",
      "tagged": [
        {
          "round": "Technical",
          "interviewDate": "2022-03-15",
          "interviewTime": "14:00",
          "location": "Zoom"
        }
      ]
    }
  ]
}"#;

/// Second record has `"email": null`
pub const NULL_EMAIL_JSON: &str = r#"{
  "applications": [
    { "company": "Shopee", "contact": "61234567", "email": "hr@shopee.sg",
      "position": "Backend Intern", "date": "2022-03-01" },
    { "company": "Grab", "contact": "61234567", "email": null,
      "position": "Backend Intern", "date": "2022-03-01" }
  ]
}"#;
