use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

pub struct InquireDriver;

fn bounded<'a, T>(q: CustomType<'a, T>, min: Option<T>, max: Option<T>) -> CustomType<'a, T>
where
    T: Copy + Clone + PartialOrd + Display + FromStr + 'static,
{
    if min.is_none() && max.is_none() {
        return q;
    }
    q.with_validator(move |x: &T| {
        let below = min.is_some_and(|lo| *x < lo);
        let above = max.is_some_and(|hi| *x > hi);
        if !below && !above {
            return Ok(Validation::Valid);
        }
        let msg = match (min, max) {
            (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
            (Some(lo), None) => format!("Must be ≥ {lo}"),
            (_, Some(hi)) => format!("Must be ≤ {hi}"),
            (None, None) => String::new(),
        };
        Ok(Validation::Invalid(msg.into()))
    })
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help);
        Ok(bounded(q, min, max).prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help);
        Ok(bounded(q, min, max).prompt()?)
    }

    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if !help.is_empty() {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }
}
