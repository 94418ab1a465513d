//! Authentication sequence sub-merger.
//!
//! The patch is applied to a copy of the current sequence, the copy is checked
//! as a whole, and only a valid copy replaces the application's sequence.

use crate::application::{Application, AuthenticationSequence, SequenceType};
use crate::error::{PatchBlock, ValidationError};
use crate::patch::assign::{assign_if_present, set_if_present};
use crate::patch::merger::UpdateFunction;
use crate::patch::request::AuthenticationSequencePatch;

pub struct AuthenticationSequenceMerger;

fn invalid(reason: impl Into<String>) -> ValidationError {
    ValidationError::new(PatchBlock::AuthenticationSequence, reason)
}

impl AuthenticationSequenceMerger {
    fn merged(
        current: &AuthenticationSequence,
        patch: &AuthenticationSequencePatch,
    ) -> Result<AuthenticationSequence, ValidationError> {
        if patch.sequence_type == Some(SequenceType::Default) {
            if patch.steps.is_some() || patch.script.is_some() {
                return Err(invalid(
                    "steps and script cannot be set on a DEFAULT sequence",
                ));
            }
            return Ok(AuthenticationSequence::default());
        }

        let mut next = current.clone();
        assign_if_present(&mut next.sequence_type, patch.sequence_type.as_ref());
        set_if_present(patch.steps.clone(), |steps| {
            next.sequence_type = SequenceType::UserDefined;
            next.steps = steps;
        });
        assign_if_present(
            &mut next.request_path_authenticators,
            patch.request_path_authenticators.as_ref(),
        );
        set_if_present(patch.script.clone(), |v| next.script = Some(v));
        assign_if_present(&mut next.subject_step_id, patch.subject_step_id.as_ref());
        assign_if_present(&mut next.attribute_step_id, patch.attribute_step_id.as_ref());
        Ok(next)
    }

    fn validate(sequence: &AuthenticationSequence) -> Result<(), ValidationError> {
        if sequence
            .request_path_authenticators
            .iter()
            .any(|a| a.trim().is_empty())
        {
            return Err(invalid("request path authenticator names must not be blank"));
        }
        if sequence.sequence_type == SequenceType::Default {
            return Self::validate_default(sequence);
        }
        if sequence.steps.is_empty() {
            return Err(invalid("a USER_DEFINED sequence needs at least one step"));
        }
        for (index, step) in sequence.steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.id != expected {
                return Err(invalid(format!(
                    "step ids must be consecutive from 1; found {} at position {}",
                    step.id, expected
                )));
            }
            if step.options.is_empty() {
                return Err(invalid(format!("step {} has no authenticator options", step.id)));
            }
            if step
                .options
                .iter()
                .any(|o| o.idp.trim().is_empty() || o.authenticator.trim().is_empty())
            {
                return Err(invalid(format!(
                    "step {} has an option with a blank idp or authenticator",
                    step.id
                )));
            }
        }

        let step_count = sequence.steps.len() as u32;
        for (label, id) in [
            ("subjectStepId", sequence.subject_step_id),
            ("attributeStepId", sequence.attribute_step_id),
        ] {
            if id == 0 || id > step_count {
                return Err(invalid(format!(
                    "{} {} does not refer to an existing step",
                    label, id
                )));
            }
        }
        Ok(())
    }

    /// A DEFAULT sequence carries no steps or script, and both step ids stay at 1
    fn validate_default(sequence: &AuthenticationSequence) -> Result<(), ValidationError> {
        if !sequence.steps.is_empty() {
            return Err(invalid("a DEFAULT sequence cannot have steps"));
        }
        if sequence.script.is_some() {
            return Err(invalid("a DEFAULT sequence cannot have a script"));
        }
        for (label, id) in [
            ("subjectStepId", sequence.subject_step_id),
            ("attributeStepId", sequence.attribute_step_id),
        ] {
            if id != 1 {
                return Err(invalid(format!(
                    "{} {} does not refer to an existing step",
                    label, id
                )));
            }
        }
        Ok(())
    }
}

impl UpdateFunction<Application, AuthenticationSequencePatch> for AuthenticationSequenceMerger {
    fn apply(
        &self,
        app: &mut Application,
        patch: &AuthenticationSequencePatch,
    ) -> Result<(), ValidationError> {
        let next = Self::merged(&app.authentication_sequence, patch)?;
        Self::validate(&next)?;
        app.authentication_sequence = next;
        Ok(())
    }
}
