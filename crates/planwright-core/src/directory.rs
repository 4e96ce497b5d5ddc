//! Read-only lookup tables injected into a wizard session.
//!
//! The directory supplies the users that may own a plan, the teams and team
//! members that can participate, and the label lists offered by the
//! selection screens. It is loaded from a JSON file or falls back to a
//! built-in sample.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};

/// A user who can own a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
}

/// A team member who can participate in a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Lookup tables for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Directory {
    pub users: Vec<UserRecord>,
    pub teams: Vec<TeamRecord>,
    pub members: Vec<MemberRecord>,
    pub roles: Vec<String>,
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    pub strategies: Vec<String>,
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Directory {
    pub fn user(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn team(&self, id: &str) -> Option<&TeamRecord> {
        self.teams.iter().find(|team| team.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Team name, or the id itself when the team is unknown.
    pub fn team_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.team(id).map_or(id, |team| team.name.as_str())
    }

    /// Member name, or `Unknown` when the member is not in the directory.
    pub fn member_name(&self, id: &str) -> &str {
        self.member(id).map_or("Unknown", |member| member.name.as_str())
    }

    /// Loads a directory from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WizardError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = serde_json::from_str(&contents)?;
        log::debug!("Loaded directory from {}", path.display());
        Ok(directory)
    }

    /// Writes the directory as pretty JSON, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| WizardError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote directory to {}", path.display());
        Ok(())
    }

    /// Location of the user's directory file following the XDG Base
    /// Directory specification: `$XDG_CONFIG_HOME/planwright/directory.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planwright")
            .place_config_file("directory.json")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }

    /// The built-in sample directory used when no file is configured.
    pub fn sample() -> Self {
        let users = [
            ("1", "Sarah Chen", "Sales Director"),
            ("2", "Mike Johnson", "VP Sales"),
            ("3", "Lisa Rodriguez", "Regional Manager"),
            ("4", "David Park", "Sales Manager"),
        ];
        let teams = [
            ("sales-east", "Sales Team - East Coast"),
            ("sales-west", "Sales Team - West Coast"),
            ("sales-emea", "Sales Team - EMEA"),
            ("enterprise", "Enterprise Sales"),
            ("smb", "SMB Sales"),
            ("inside-sales", "Inside Sales"),
            ("field-sales", "Field Sales"),
            ("channel-partners", "Channel Partners"),
        ];
        let members = [
            ("1", "Alex Thompson", "alex@company.com"),
            ("2", "Jordan Lee", "jordan@company.com"),
            ("3", "Sam Wilson", "sam@company.com"),
            ("4", "Casey Brown", "casey@company.com"),
            ("5", "Taylor Davis", "taylor@company.com"),
            ("6", "Morgan Smith", "morgan@company.com"),
        ];

        Self {
            users: users
                .into_iter()
                .map(|(id, name, role)| UserRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    role: role.to_string(),
                })
                .collect(),
            teams: teams
                .into_iter()
                .map(|(id, name)| TeamRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            members: members
                .into_iter()
                .map(|(id, name, email)| MemberRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .collect(),
            roles: labels(&[
                "Sales Development Rep (SDR)",
                "Account Executive (AE)",
                "Account Manager",
                "Sales Engineer",
                "Sales Manager",
                "Regional Director",
            ]),
            industries: labels(&[
                "Technology",
                "Healthcare",
                "Finance",
                "Manufacturing",
                "Retail",
                "Education",
                "Real Estate",
                "Professional Services",
                "Non-profit",
                "Government",
            ]),
            regions: labels(&[
                "North America",
                "South America",
                "Europe",
                "Asia Pacific",
                "Middle East",
                "Africa",
                "United States",
                "Canada",
                "United Kingdom",
                "Germany",
                "Australia",
            ]),
            strategies: labels(&[
                "Cold Calling",
                "Email Outreach",
                "Social Selling (LinkedIn)",
                "Trade Shows & Events",
                "Content Marketing",
                "Channel Partners",
                "Referrals",
                "Direct Mail",
                "Webinars",
                "Cold Email Sequences",
            ]),
        }
    }
}
