//! The self-documenting command catalog.
//!
//! The catalog is static configuration: a fixed list of (name, description)
//! pairs that a bare `gantry` invocation renders as a sorted,
//! column-aligned listing.

/// A (name, description) pair in the command listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Minimum width of the name column; sized to fit
/// `update-poetry-dependencies`.
const NAME_COLUMN_WIDTH: usize = 28;

/// Every gantry command. Declaration order is irrelevant; rendering sorts.
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "build",
        description: "Build the container image with version and build-date metadata",
    },
    CommandEntry {
        name: "push",
        description: "Tag and push the image to the configured registry",
    },
    CommandEntry {
        name: "clean",
        description: "Remove the local container image, ignoring missing-image errors",
    },
    CommandEntry {
        name: "deploy",
        description: "Run clean, build, and push in sequence",
    },
    CommandEntry {
        name: "update-poetry-dependencies",
        description: "Re-add each dependency from the requirements manifest via poetry",
    },
    CommandEntry {
        name: "watch-actions",
        description: "Wait for a workflow run to finish, then notify the desktop",
    },
    CommandEntry {
        name: "changelog-action",
        description: "Trigger the remote changelog workflow",
    },
    CommandEntry {
        name: "release-action",
        description: "Trigger the remote release workflow",
    },
    CommandEntry {
        name: "version",
        description: "Print the image version from the version manifest",
    },
    CommandEntry {
        name: "help",
        description: "Show this command listing",
    },
];

/// Render entries as one aligned line each, sorted ascending.
///
/// Names are left-justified into the name column, then the resulting lines
/// are sorted byte-lexicographically. Empty input renders empty output.
pub fn render(entries: &[CommandEntry]) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "  {name:<width$}{description}",
                name = entry.name,
                width = NAME_COLUMN_WIDTH,
                description = entry.description,
            )
        })
        .collect();
    lines.sort();

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
