//! Schedule lookup and running-day checks.

use std::path::Path;

use chrono::Weekday;
use tracing::{debug, info_span, warn};

use crate::domain::{DomainError, Route, TrainModel, TravelDate, parse_weekday, weekday_abbrev};

use super::error::ScheduleError;
use super::types::ScheduleDocument;

/// A validated train schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSchedule {
    pub model: TrainModel,
    pub name: String,
    pub days: Vec<Weekday>,
    pub route: Route,
}

impl TrainSchedule {
    /// Validate a parsed document.
    ///
    /// Only the train model is required to be valid. Running days that are
    /// not weekday abbreviations are dropped with a warning, so the train
    /// can still be found and checked against the date.
    pub fn from_document(doc: ScheduleDocument) -> Result<Self, DomainError> {
        let data = doc.data;
        let model = TrainModel::parse(&data.train_model)?;
        let mut days = Vec::with_capacity(data.days.len());
        for token in &data.days {
            match parse_weekday(token) {
                Ok(day) => days.push(day),
                Err(_) => warn!(train = %model, day = %token, "Ignoring unrecognised running day"),
            }
        }
        let route = Route::new(data.routes.into_iter().map(|stop| stop.city));

        Ok(Self {
            model,
            name: data.train_name,
            days,
            route,
        })
    }

    pub fn runs_on(&self, date: TravelDate) -> bool {
        self.days.contains(&date.weekday())
    }

    /// Running days as listed in the document, e.g. "Mon, Wed, Fri".
    pub fn days_label(&self) -> String {
        self.days
            .iter()
            .map(|d| weekday_abbrev(*d))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// All schedules known to a run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    schedules: Vec<TrainSchedule>,
}

impl ScheduleStore {
    pub fn new(schedules: Vec<TrainSchedule>) -> Self {
        Self { schedules }
    }

    /// Load every `*.json` document in `dir`, in file-name order.
    ///
    /// Documents that cannot be read or do not validate are skipped with a
    /// warning. Only a missing or unreadable directory is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let dir = dir.as_ref();
        let io_err = |source| ScheduleError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut schedules = Vec::with_capacity(paths.len());
        for path in paths {
            let _span = info_span!("schedule", path = %path.display()).entered();
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| {
                    serde_json::from_str::<ScheduleDocument>(&json).map_err(|e| e.to_string())
                })
                .and_then(|doc| TrainSchedule::from_document(doc).map_err(|e| e.to_string()));

            match parsed {
                Ok(schedule) => schedules.push(schedule),
                Err(error) => {
                    warn!(path = %path.display(), %error, "Skipping schedule document");
                }
            }
        }

        debug!(count = schedules.len(), dir = %dir.display(), "Loaded schedules");
        Ok(Self { schedules })
    }

    /// First schedule for `model`, in load order.
    pub fn find(&self, model: &TrainModel) -> Option<&TrainSchedule> {
        self.schedules.iter().find(|s| &s.model == model)
    }

    /// Resolve the schedule for a run, checking the train runs on `date`.
    pub fn plan(
        &self,
        model: &TrainModel,
        date: TravelDate,
    ) -> Result<&TrainSchedule, ScheduleError> {
        let schedule = self
            .find(model)
            .ok_or_else(|| ScheduleError::NotFound(model.clone()))?;

        if !schedule.runs_on(date) {
            return Err(ScheduleError::NotRunning {
                train: model.clone(),
                name: schedule.name.clone(),
                weekday: weekday_abbrev(date.weekday()).to_string(),
                days: schedule.days_label(),
            });
        }

        Ok(schedule)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
