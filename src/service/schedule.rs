//! Backup schedule orchestration.
//!
//! Coordinates creation, activation toggling, and deletion of recurring backup
//! schedules for a single server. Every operation validates input, enforces
//! ownership, and maps all failures into a user-safe [`OpOutcome`].

use sea_orm::DatabaseConnection;

use crate::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::{
        outcome::OpOutcome,
        schedule::{PaginatedSchedules, Schedule, ScheduleCreateResult, ScheduleForm},
    },
    validation::validate_schedule_form,
};

/// Number of schedules shown per page.
pub const SCHEDULES_PER_PAGE: u64 = 10;

/// Service providing backup schedule operations for a server.
pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new backup schedule for the server from a creation form.
    ///
    /// Validates the form and persists the schedule active by default. Returns
    /// the outcome together with the form state to render next: reset to
    /// defaults on success, unchanged for retry on any failure.
    ///
    /// # Arguments
    /// - `server` - The server the schedule is created for
    /// - `form` - Raw creation form input
    ///
    /// # Returns
    /// - `ScheduleCreateResult` - Outcome and next form state
    pub async fn create(
        &self,
        server: &entity::server::Model,
        form: &ScheduleForm,
    ) -> ScheduleCreateResult {
        let params = match validate_schedule_form(form) {
            Ok(params) => params,
            Err(errors) => {
                return ScheduleCreateResult {
                    outcome: OpOutcome::invalid(errors),
                    form: form.clone(),
                }
            }
        };

        let repo = ScheduleRepository::new(self.db);
        match repo.create(server.id, &params).await {
            Ok(_) => ScheduleCreateResult {
                outcome: OpOutcome::success("Backup schedule created successfully."),
                form: ScheduleForm::default(),
            },
            Err(e) => {
                tracing::error!(
                    "Failed to create backup schedule for server {}: {}",
                    server.id,
                    e
                );
                ScheduleCreateResult {
                    outcome: OpOutcome::error(
                        "Failed to create backup schedule. Please try again.",
                    ),
                    form: form.clone(),
                }
            }
        }
    }

    /// Flips the active flag of a schedule owned by the server.
    ///
    /// The success message reflects the state the schedule ended up in.
    ///
    /// # Arguments
    /// - `server` - The acting server
    /// - `schedule_id` - ID of the schedule to toggle
    ///
    /// # Returns
    /// - `OpOutcome` - Success, not-found, or generic failure
    pub async fn toggle(&self, server: &entity::server::Model, schedule_id: i32) -> OpOutcome {
        let repo = ScheduleRepository::new(self.db);

        let schedule = match self.load_owned(server, schedule_id).await {
            Ok(schedule) => schedule,
            Err(outcome) => return outcome,
        };

        let target = !schedule.is_active;
        match repo.set_active(schedule, target).await {
            Ok(updated) if updated.is_active => {
                OpOutcome::success("Backup schedule activated successfully.")
            }
            Ok(_) => OpOutcome::success("Backup schedule deactivated successfully."),
            Err(e) => {
                tracing::error!("Failed to toggle schedule {}: {}", schedule_id, e);
                OpOutcome::error("Failed to update backup schedule. Please try again.")
            }
        }
    }

    /// Deletes a schedule owned by the server.
    ///
    /// # Arguments
    /// - `server` - The acting server
    /// - `schedule_id` - ID of the schedule to delete
    ///
    /// # Returns
    /// - `OpOutcome` - Success, not-found, or generic failure
    pub async fn delete(&self, server: &entity::server::Model, schedule_id: i32) -> OpOutcome {
        let repo = ScheduleRepository::new(self.db);

        let schedule = match self.load_owned(server, schedule_id).await {
            Ok(schedule) => schedule,
            Err(outcome) => return outcome,
        };

        match repo.delete(schedule.id).await {
            Ok(()) => OpOutcome::success("Backup schedule deleted successfully."),
            Err(e) => {
                tracing::error!("Failed to delete schedule {}: {}", schedule_id, e);
                OpOutcome::error("Failed to delete backup schedule. Please try again.")
            }
        }
    }

    /// Gets a page of the server's schedules, newest first.
    ///
    /// # Arguments
    /// - `server_id` - ID of the server whose schedules to list
    /// - `page` - Page number (0-indexed)
    ///
    /// # Returns
    /// - `Ok(PaginatedSchedules)` - Page of domain models with metadata
    /// - `Err(AppError)` - Database error or unparseable stored record
    pub async fn get_paginated(
        &self,
        server_id: i32,
        page: u64,
    ) -> Result<PaginatedSchedules, AppError> {
        let repo = ScheduleRepository::new(self.db);
        let (entities, total) = repo
            .get_by_server_paginated(server_id, page, SCHEDULES_PER_PAGE)
            .await?;

        let schedules = entities
            .into_iter()
            .map(Schedule::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedSchedules {
            schedules,
            total,
            page,
            per_page: SCHEDULES_PER_PAGE,
            total_pages: total.div_ceil(SCHEDULES_PER_PAGE),
        })
    }

    /// Loads a schedule scoped to the acting server.
    ///
    /// A schedule that does not exist and one owned by another server yield the
    /// same not-found outcome, so callers cannot probe for foreign record IDs.
    async fn load_owned(
        &self,
        server: &entity::server::Model,
        schedule_id: i32,
    ) -> Result<entity::backup_schedule::Model, OpOutcome> {
        let repo = ScheduleRepository::new(self.db);

        match repo.find_in_server(schedule_id, server.id).await {
            Ok(Some(schedule)) => Ok(schedule),
            Ok(None) => {
                tracing::warn!(
                    "Schedule {} not found for server {}",
                    schedule_id,
                    server.id
                );
                Err(OpOutcome::error("Schedule not found."))
            }
            Err(e) => {
                tracing::error!("Failed to look up schedule {}: {}", schedule_id, e);
                Err(OpOutcome::error("Schedule not found."))
            }
        }
    }
}
