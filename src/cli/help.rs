//! The overview screen printed when `ui` runs without a subcommand.

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

const CLI_INFO: &str = "
This innovative solution empowers developers by automating the often-tedious process of integrating UI components.
Eliminate the need for manual configuration and repetitive tasks, and unlock a new level of development efficiency.
";

const OPTIONS_LEGEND: &str = "-a, --all [boolean]: Add all components
-p, --packagePath [string]: Specify the path to the package.json file
-tw, --tailwindPath [string]: Specify the path to the tailwind.config.js file
-app, --appPath [string]: Specify the path to the App.tsx file";

const FLAGS_LEGEND: &str = "--prettier [boolean]: Apply Prettier formatting to the added content
--addApp [boolean]: Include App.tsx file content that requires a provider";

const EXAMPLES: &str = "ui suggest \"what is the best library which simple and yet beautiful?\"
ui explain \"how to center a div? With a very basic and beginner explaination\"
ui create nextjs-ui-website
ui init nextjs-ui-website
ui add -a
ui remove accordion";

const ARGUMENTS: &str = "[--option] [--flag]";

/// Width used when the terminal size cannot be detected.
const FALLBACK_TERMINAL_WIDTH: u16 = 120;

/// One row of the command table: (command, description).
pub const COMMAND_ROWS: [(&str, &str); 9] = [
    (
        "suggest",
        "Suggests you about what ui component is best for your job and ai chat...",
    ),
    (
        "explain",
        "Explains you what course of actions you should take to solve your ui problems...",
    ),
    ("create", "Creates A new project using any frontend frameworks"),
    ("init", "Initializes a new project"),
    ("add", "Adds components to your project"),
    ("remove", "Removes components from the project"),
    ("upgrade", "Upgrades project components to the latest versions"),
    (
        "list",
        "Lists all components, showing status, descriptions, and versions",
    ),
    ("doctor", "Checks for issues in the project"),
];

/// Builds the command summary table.
pub fn command_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let terminal_width = table.width().unwrap_or(FALLBACK_TERMINAL_WIDTH);
    table.set_width(terminal_width * 8 / 10);

    table.set_header(vec![
        header_cell("Command", Color::Red),
        header_cell("Description", Color::Magenta),
        header_cell("Arguments", Color::Cyan),
    ]);

    for (command, description) in COMMAND_ROWS {
        table.add_row(vec![
            Cell::new(command).fg(Color::Green),
            Cell::new(description).fg(Color::Grey),
            Cell::new(ARGUMENTS)
                .fg(Color::White)
                .add_attribute(Attribute::Italic),
        ]);
    }

    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Percentage(8)),
        ColumnConstraint::LowerBoundary(Width::Percentage(25)),
        ColumnConstraint::LowerBoundary(Width::Percentage(10)),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Center);
    }

    table
}

fn header_cell(title: &str, color: Color) -> Cell {
    Cell::new(title)
        .fg(color)
        .set_alignment(CellAlignment::Center)
}

/// Renders the full overview: info banner, legends, command table and examples.
pub fn render_overview() -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}\n{}\n\n{}\n\n{}\n{}\n",
        CLI_INFO,
        "Options:".truecolor(0xff, 0x00, 0xd9),
        OPTIONS_LEGEND,
        "Flags:".truecolor(0x95, 0x00, 0xff),
        FLAGS_LEGEND,
        command_table(),
        "Examples:".truecolor(0xff, 0x00, 0x80),
        EXAMPLES,
    )
}

pub fn print_overview() {
    println!("{}", render_overview());
}
