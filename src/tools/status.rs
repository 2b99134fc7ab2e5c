//! NutriMate status tool
//!
//! Provides runtime status information about the service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Planning workflow instructions for AI assistants
pub const PLANNING_INSTRUCTIONS: &str = r#"
# NutriMate Planning Instructions

This guide explains how to plan meals and build grocery lists with the
NutriMate tools.

## Overview

The typical workflow:
1. **Profile** - store biometrics once with `set_profile`
2. **Targets** - estimate a daily calorie target and per-meal split
3. **Recipes** - store recipes with their ingredient lines
4. **Grocery lists** - aggregate recipe ingredients into a categorized list

---

## Calorie Targets

`estimate_calorie_target` computes BMR and TDEE from biometrics and applies
the goal adjustment. Biometrics can be passed inline or omitted to use the
stored profile.

Two formulas are available and they are NOT interchangeable:
- `mifflin_st_jeor` (default): goal applied multiplicatively
  (weight_loss x0.8, muscle_gain x1.1)
- `harris_benedict`: goal applied as a flat offset (-400 / +400 kcal)

`plan_meal_targets` runs the estimate and splits it across meal slots in one
call. Without a snack the split is 30/40/30 (breakfast/lunch/dinner); with
`include_snack` it is 25/35/35/5. Slots are rounded independently, so the
slot sum can differ from the daily total by a calorie or two - this is
expected.

## Grocery Lists

Two ways to fill a list, with different merge behavior:

- `add_recipe_to_grocery_list` (one recipe): if an ingredient name is
  already on the list, the existing quantity is KEPT and only the recipe
  label is recorded. Quantities are never summed on this path.
- `add_meal_plan_to_grocery_list` (several recipes at once): quantities are
  parsed as numbers (unparseable text counts as 1) and SUMMED per
  name+unit group.

Item names are matched case-insensitively. Units are never converted:
"200 ml milk" and "1 cup milk" stay separate entries.

`get_grocery_list` returns items grouped by store category (produce, dairy,
protein, grains, pantry, other). Categories are derived from the item name
at read time.

Check off items with `set_item_checked`; `clear_checked_items` removes all
checked items from a list.
"#;

/// Runtime status of the NutriMate service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        // Get database size if it exists
        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
