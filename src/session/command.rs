//! Interactive commands and the line protocol used by `play`

use super::InputError;

/// A user command dispatched to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    Reset,
    ToggleGrid,
    ToggleWrap,
    SpeedUp,
    SlowDown,
    /// Advance exactly one generation, even while paused
    Step,
    /// Toggle the cell under a pointer position given in pixels
    ToggleAt { x: f32, y: f32 },
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// `p` pause, `r` reset, `g` grid, `w` wrap, `+`/`-` speed, `s` step,
    /// `t X Y` toggle at pointer position, `q` quit.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().ok_or(InputError::EmptyCommand)?;

        let command = match keyword {
            "p" | "pause" => Command::TogglePause,
            "r" | "reset" => Command::Reset,
            "g" | "grid" => Command::ToggleGrid,
            "w" | "wrap" => Command::ToggleWrap,
            "+" | "faster" => Command::SpeedUp,
            "-" | "slower" => Command::SlowDown,
            "s" | "step" => Command::Step,
            "q" | "quit" => Command::Quit,
            "t" | "toggle" => {
                let x = Self::coordinate(parts.next(), "x")?;
                let y = Self::coordinate(parts.next(), "y")?;
                Command::ToggleAt { x, y }
            }
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }

    fn coordinate(token: Option<&str>, name: &'static str) -> Result<f32, InputError> {
        let token = token.ok_or(InputError::MissingArgument(name))?;
        token
            .parse::<f32>()
            .map_err(|_| InputError::InvalidNumber(token.to_string()))
    }
}
