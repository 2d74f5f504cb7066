/// Shows the usage of every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const WORD: &'static str = "help";
    pub const USAGE: &'static str = "Commands:\n  \
        add c/COMPANY ct/CONTACT e/EMAIL p/POSITION d/DATE\n  \
        list\n  \
        edit INDEX [c/COMPANY] [ct/CONTACT] [e/EMAIL] [p/POSITION] [d/DATE]\n  \
        delete INDEX\n  \
        interview INDEX r/ROUND d/INTERVIEW_DATE t/INTERVIEW_TIME l/LOCATION\n  \
        clear\n  \
        help\n  \
        exit\n\
        Dates are YYYY-MM-DD, times are HH:MM (24-hour).";
}
