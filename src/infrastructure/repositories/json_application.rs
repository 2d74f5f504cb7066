//! JSON Application Repository
//!
//! Persists the application book as a single JSON document:
//!
//! ```json
//! { "applications": [ { "company": "...", ..., "tagged": [ ... ] } ] }
//! ```
//!
//! Every field is re-validated on load through the same value objects the
//! command parser uses.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Application, ApplicationBook, Interview};
use crate::domain::ports::{ApplicationRepository, FileSystem, StorageError};
use crate::domain::value_objects::{
    Company, Contact, Date, Email, Field, FieldError, InterviewDate, InterviewTime, Location,
    Position, Round,
};
use crate::infrastructure::fs::LocalFs;

const APPLICATION_OWNER: &str = "Application";
const INTERVIEW_OWNER: &str = "Interview";

/// Stored form of an [`Interview`]
///
/// Fields are optional so that `null` and absent keys both surface as a
/// missing-field error instead of a serde error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonInterviewRecord {
    pub round: Option<String>,
    pub interview_date: Option<String>,
    pub interview_time: Option<String>,
    pub location: Option<String>,
}

impl From<&Interview> for JsonInterviewRecord {
    fn from(interview: &Interview) -> Self {
        Self {
            round: Some(interview.round().to_raw()),
            interview_date: Some(interview.interview_date().to_raw()),
            interview_time: Some(interview.interview_time().to_raw()),
            location: Some(interview.location().to_raw()),
        }
    }
}

impl JsonInterviewRecord {
    pub fn to_model(&self) -> Result<Interview, FieldError> {
        let round = Round::parse_required(self.round.as_deref(), INTERVIEW_OWNER)?;
        let interview_date =
            InterviewDate::parse_required(self.interview_date.as_deref(), INTERVIEW_OWNER)?;
        let interview_time =
            InterviewTime::parse_required(self.interview_time.as_deref(), INTERVIEW_OWNER)?;
        let location = Location::parse_required(self.location.as_deref(), INTERVIEW_OWNER)?;
        Ok(Interview::new(round, interview_date, interview_time, location))
    }
}

/// Stored form of an [`Application`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonApplicationRecord {
    pub company: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub date: Option<String>,
    /// Interviews, in the application's canonical order
    #[serde(default)]
    pub tagged: Vec<JsonInterviewRecord>,
}

impl From<&Application> for JsonApplicationRecord {
    fn from(application: &Application) -> Self {
        Self {
            company: Some(application.company().to_raw()),
            contact: Some(application.contact().to_raw()),
            email: Some(application.email().to_raw()),
            position: Some(application.position().to_raw()),
            date: Some(application.date().to_raw()),
            tagged: application
                .interviews()
                .iter()
                .map(JsonInterviewRecord::from)
                .collect(),
        }
    }
}

impl JsonApplicationRecord {
    /// Rebuild the application, failing at the first missing or invalid field.
    ///
    /// Interviews are checked before the application's own fields.
    pub fn to_model(&self) -> Result<Application, FieldError> {
        let interviews = self
            .tagged
            .iter()
            .map(JsonInterviewRecord::to_model)
            .collect::<Result<Vec<_>, _>>()?;

        let company = Company::parse_required(self.company.as_deref(), APPLICATION_OWNER)?;
        let contact = Contact::parse_required(self.contact.as_deref(), APPLICATION_OWNER)?;
        let email = Email::parse_required(self.email.as_deref(), APPLICATION_OWNER)?;
        let position = Position::parse_required(self.position.as_deref(), APPLICATION_OWNER)?;
        let date = Date::parse_required(self.date.as_deref(), APPLICATION_OWNER)?;

        Ok(Application::new(company, contact, email, position, date).with_interviews(interviews))
    }
}

/// The whole data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableBook {
    #[serde(default)]
    pub applications: Vec<JsonApplicationRecord>,
}

impl From<&ApplicationBook> for JsonSerializableBook {
    fn from(book: &ApplicationBook) -> Self {
        Self {
            applications: book
                .applications()
                .iter()
                .map(JsonApplicationRecord::from)
                .collect(),
        }
    }
}

impl JsonSerializableBook {
    pub fn to_model(&self) -> Result<ApplicationBook, StorageError> {
        let applications = self
            .applications
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .to_model()
                    .map_err(|source| StorageError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        ApplicationBook::from_applications(applications).ok_or(StorageError::DuplicateApplication)
    }
}

/// [`ApplicationRepository`] backed by one JSON file
pub struct JsonApplicationRepository<F: FileSystem = LocalFs> {
    path: PathBuf,
    fs: F,
}

impl JsonApplicationRepository<LocalFs> {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, LocalFs::new())
    }
}

impl<F: FileSystem> JsonApplicationRepository<F> {
    pub fn with_fs(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<ApplicationBook, StorageError> {
        if !self.fs.exists(&self.path) {
            tracing::debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(ApplicationBook::new());
        }

        let content = self.fs.read(&self.path).map_err(|e| StorageError::Access {
            message: e.to_string(),
        })?;

        let document: JsonSerializableBook =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let book = document.to_model()?;
        tracing::debug!(
            path = %self.path.display(),
            applications = book.len(),
            "loaded applications"
        );
        Ok(book)
    }

    fn save_to_disk(&self, book: &ApplicationBook) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&JsonSerializableBook::from(book)).map_err(
            |e| StorageError::Serialization {
                message: e.to_string(),
            },
        )?;

        self.fs
            .write(&self.path, &content)
            .map_err(|e| StorageError::Access {
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            applications = book.len(),
            "saved applications"
        );
        Ok(())
    }
}

impl<F: FileSystem> ApplicationRepository for JsonApplicationRepository<F> {
    fn load(&self) -> Result<ApplicationBook, StorageError> {
        self.load_from_disk()
    }

    fn save(&self, book: &ApplicationBook) -> Result<(), StorageError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Access {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| StorageError::Access {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::Access {
                message: e.to_string(),
            })?;

        let result = self.save_to_disk(book);

        let _ = lock_file.unlock();
        result
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
