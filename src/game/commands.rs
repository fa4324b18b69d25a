//! Command parsing for the labyrinth.
//!
//! A raw input line is resolved once into a [`GameCommand`]; the session then
//! dispatches on the variant. Verbs are case-insensitive, arguments keep the
//! player's spelling.

/// Verbs that need an argument, used to pick the usage hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Use,
}

impl Verb {
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Go => "Where to? Give a direction (for example, 'go north').",
            Verb::Take => "Take what? Name an item (for example, 'take torch').",
            Verb::Use => "Use what? Name an item (for example, 'use torch').",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Blank input.
    Empty,
    Look,            // look
    Inventory,       // inventory, inv
    Help,            // help
    Move(String),    // north/south/east/west, go <dir>, move <dir>
    Take(String),    // take <item>, get <item>
    Use(String),     // use <item>
    Solve,           // solve (opens the chest in the treasure room)
    Quit,            // quit, exit
    /// A verb that needs an argument was given none.
    MissingArgument(Verb),
    Unknown(String),
}

/// Split on the first whitespace run into a lowercased action and a trimmed argument.
fn split_action(input: &str) -> Option<(String, &str)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((action, rest)) => Some((action.to_lowercase(), rest.trim())),
        None => Some((input.to_lowercase(), "")),
    }
}

pub fn parse_command(input: &str) -> GameCommand {
    let Some((action, argument)) = split_action(input) else {
        return GameCommand::Empty;
    };

    let with_argument = |verb: Verb, build: fn(String) -> GameCommand| {
        if argument.is_empty() {
            GameCommand::MissingArgument(verb)
        } else {
            build(argument.to_string())
        }
    };

    match action.as_str() {
        "look" => GameCommand::Look,
        "inventory" | "inv" => GameCommand::Inventory,
        "help" => GameCommand::Help,
        "north" | "south" | "east" | "west" => GameCommand::Move(action.clone()),
        "go" | "move" => with_argument(Verb::Go, GameCommand::Move),
        "take" | "get" => with_argument(Verb::Take, GameCommand::Take),
        "use" => with_argument(Verb::Use, GameCommand::Use),
        "solve" => GameCommand::Solve,
        "quit" | "exit" => GameCommand::Quit,
        _ => GameCommand::Unknown(action.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse_command(""), GameCommand::Empty);
        assert_eq!(parse_command("   \t "), GameCommand::Empty);
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("LOOK"), GameCommand::Look);
        assert_eq!(parse_command("Inv"), GameCommand::Inventory);
        assert_eq!(parse_command("  Help  "), GameCommand::Help);
        assert_eq!(parse_command("SOLVE"), GameCommand::Solve);
        assert_eq!(parse_command("Exit"), GameCommand::Quit);
    }

    #[test]
    fn bare_directions_move() {
        assert_eq!(parse_command("North"), GameCommand::Move("north".into()));
        assert_eq!(parse_command("west"), GameCommand::Move("west".into()));
    }

    #[test]
    fn arguments_keep_spelling_and_inner_spaces() {
        assert_eq!(parse_command("go   North "), GameCommand::Move("North".into()));
        assert_eq!(parse_command("move up"), GameCommand::Move("up".into()));
        assert_eq!(
            parse_command("take  Bronze Box"),
            GameCommand::Take("Bronze Box".into())
        );
        assert_eq!(parse_command("GET torch"), GameCommand::Take("torch".into()));
        assert_eq!(parse_command("use rusty key"), GameCommand::Use("rusty key".into()));
    }

    #[test]
    fn missing_arguments_carry_the_verb() {
        assert_eq!(parse_command("go"), GameCommand::MissingArgument(Verb::Go));
        assert_eq!(parse_command("take "), GameCommand::MissingArgument(Verb::Take));
        assert_eq!(parse_command("use"), GameCommand::MissingArgument(Verb::Use));
        assert!(Verb::Go.usage().contains("go north"));
    }

    #[test]
    fn unknown_verbs_are_reported() {
        assert_eq!(parse_command("dance wildly"), GameCommand::Unknown("dance".into()));
        assert_eq!(parse_command("drop torch"), GameCommand::Unknown("drop".into()));
    }
}
