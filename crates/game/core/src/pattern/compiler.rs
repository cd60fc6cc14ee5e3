//! Pattern string compiler.

use crate::action::{ActionTable, Instruction, Wait};

use super::{CompiledPattern, PatternError};

/// Token separator in pattern strings.
pub const SEPARATOR: char = '|';

/// Compiles a designer-authored pattern string.
///
/// Tokens are trimmed of surrounding whitespace. Each action token looks one
/// token ahead: a finite number there is consumed as the action's wait,
/// anything else leaves the action with its default from `table`.
///
/// # Errors
///
/// Fails on a blank string, an empty token, or a token that is not an action
/// where an action is expected (including a number that does not follow an
/// action).
pub fn compile(source: &str, table: &ActionTable) -> Result<CompiledPattern, PatternError> {
    if source.trim().is_empty() {
        return Err(PatternError::Empty);
    }

    let tokens: Vec<&str> = source.split(SEPARATOR).map(str::trim).collect();
    if let Some(position) = tokens.iter().position(|token| token.is_empty()) {
        return Err(PatternError::EmptyToken { position });
    }

    let mut instructions = Vec::with_capacity(tokens.len());
    let mut position = 0;
    while position < tokens.len() {
        let token = tokens[position];
        let (action, default_wait) =
            table
                .lookup(token)
                .ok_or_else(|| PatternError::UnknownAction {
                    token: token.to_string(),
                    position,
                })?;

        match tokens.get(position + 1).and_then(|next| parse_wait(next)) {
            Some(wait) => {
                instructions.push(Instruction::with_explicit_wait(action, wait));
                position += 2;
            }
            None => {
                instructions.push(Instruction::new(action, default_wait));
                position += 1;
            }
        }
    }

    Ok(CompiledPattern::from_instructions(instructions))
}

fn parse_wait(token: &str) -> Option<Wait> {
    token
        .parse::<f32>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .map(Wait::from_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionId, INSTANT_ACTION_SECONDS};

    fn table() -> ActionTable {
        ActionTable::new(0.5, 0.4, 0.6).unwrap()
    }

    fn steps(pattern: &CompiledPattern) -> Vec<(ActionId, Wait)> {
        pattern
            .instructions()
            .iter()
            .map(|instruction| (instruction.action, instruction.wait))
            .collect()
    }

    #[test]
    fn trailing_number_belongs_to_preceding_action() {
        let pattern = compile("AU|AM|AD|2", &table()).unwrap();

        assert_eq!(
            steps(&pattern),
            vec![
                (ActionId::AttackUp, Wait::Seconds(0.5)),
                (ActionId::AttackMiddle, Wait::Seconds(0.4)),
                (ActionId::AttackDown, Wait::Seconds(2.0)),
            ]
        );
    }

    #[test]
    fn explicit_wait_only_overrides_its_own_action() {
        let pattern = compile("AU|2|AM", &table()).unwrap();

        assert_eq!(
            steps(&pattern),
            vec![
                (ActionId::AttackUp, Wait::Seconds(2.0)),
                (ActionId::AttackMiddle, Wait::Seconds(0.4)),
            ]
        );
        assert!(pattern.instructions()[0].explicit_wait);
        assert!(!pattern.instructions()[1].explicit_wait);
    }

    #[test]
    fn jump_defaults_to_grounded_stall() {
        let pattern = compile("AD|JUMP|0.5|AD|3|AU", &table()).unwrap();

        assert_eq!(
            steps(&pattern),
            vec![
                (ActionId::AttackDown, Wait::Seconds(0.6)),
                (ActionId::Jump, Wait::Seconds(0.5)),
                (ActionId::AttackDown, Wait::Seconds(3.0)),
                (ActionId::AttackUp, Wait::Seconds(0.5)),
            ]
        );

        let pattern = compile("JUMP|AU", &table()).unwrap();
        assert_eq!(pattern.instructions()[0].wait, Wait::UntilGrounded);
    }

    #[test]
    fn explicit_negative_wait_is_a_stall() {
        let pattern = compile("AU|-1", &table()).unwrap();
        assert_eq!(pattern.instructions()[0].wait, Wait::UntilGrounded);
    }

    #[test]
    fn toggles_use_instant_duration() {
        let pattern = compile("STOPF", &table()).unwrap();
        assert_eq!(
            steps(&pattern),
            vec![(ActionId::StopFollow, Wait::Seconds(INSTANT_ACTION_SECONDS))]
        );
    }

    #[test]
    fn whitespace_around_tokens_is_ignored() {
        let pattern = compile(" STARTF | AU | 1.5 ", &table()).unwrap();
        assert_eq!(
            steps(&pattern),
            vec![
                (
                    ActionId::StartFollow,
                    Wait::Seconds(INSTANT_ACTION_SECONDS)
                ),
                (ActionId::AttackUp, Wait::Seconds(1.5)),
            ]
        );
    }

    #[test]
    fn consumed_tokens_match_source_tokens() {
        for source in [
            "AU",
            "AU|AM|AD|2",
            "AD|JUMP|0.5|AD|3|AU",
            "STARTF|STARTAUTOJUMP|0|JUMP|STOPAUTOJUMP|STOPF|0.25",
        ] {
            let pattern = compile(source, &table()).unwrap();
            assert_eq!(
                pattern.token_count(),
                source.split(SEPARATOR).count(),
                "token count mismatch for {source}"
            );
        }
    }

    #[test]
    fn unknown_action_is_reported_with_position() {
        let err = compile("AU|KICK|AM", &table()).unwrap_err();
        assert_eq!(
            err,
            PatternError::UnknownAction {
                token: "KICK".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn stray_numbers_are_not_actions() {
        // A leading number has no action to attach to.
        assert!(matches!(
            compile("2|AU", &table()),
            Err(PatternError::UnknownAction { position: 0, .. })
        ));
        // Only one wait may follow an action.
        assert!(matches!(
            compile("AU|1|2", &table()),
            Err(PatternError::UnknownAction { position: 2, .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_not_waits() {
        assert!(matches!(
            compile("AU|inf", &table()),
            Err(PatternError::UnknownAction { position: 1, .. })
        ));
        assert!(matches!(
            compile("AU|NaN", &table()),
            Err(PatternError::UnknownAction { position: 1, .. })
        ));
    }

    #[test]
    fn empty_input_and_tokens_are_rejected() {
        assert_eq!(compile("", &table()), Err(PatternError::Empty));
        assert_eq!(compile("   ", &table()), Err(PatternError::Empty));
        assert_eq!(
            compile("AU||AM", &table()),
            Err(PatternError::EmptyToken { position: 1 })
        );
        assert_eq!(
            compile("AU|", &table()),
            Err(PatternError::EmptyToken { position: 1 })
        );
    }

    #[test]
    fn display_recompiles_to_same_steps() {
        let pattern = compile("AD|JUMP|AD|3|STARTF", &table()).unwrap();
        let text = pattern.to_string();
        assert_eq!(text, "AD|0.6|JUMP|-1|AD|3|STARTF|0.01");

        let again = compile(&text, &table()).unwrap();
        assert_eq!(steps(&again), steps(&pattern));
    }
}
