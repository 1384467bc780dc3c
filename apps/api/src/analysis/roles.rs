//! Job role catalog: each role's weighted skill requirements.

use serde::Serialize;

use crate::errors::AppError;

/// A named role and its ordered skill → weight requirements.
///
/// Weights are expected to sum to at most 1.0; nothing enforces it.
#[derive(Debug, Clone, Copy)]
pub struct RoleProfile {
    pub name: &'static str,
    pub skills: &'static [(&'static str, f64)],
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSkill {
    pub skill: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: &'static str,
    pub skills: Vec<RoleSkill>,
}

impl RoleProfile {
    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            role: self.name,
            skills: self
                .skills
                .iter()
                .map(|&(skill, weight)| RoleSkill { skill, weight })
                .collect(),
        }
    }
}

pub const JOB_ROLES: &[RoleProfile] = &[
    RoleProfile {
        name: "Software Engineer (General)",
        skills: &[
            ("python", 0.15),
            ("java", 0.15),
            ("data structures", 0.2),
            ("algorithms", 0.2),
            ("databases", 0.15),
            ("git", 0.15),
        ],
    },
    RoleProfile {
        name: "Backend Developer",
        skills: &[
            ("python", 0.2),
            ("java", 0.2),
            ("databases", 0.2),
            ("apis", 0.2),
            ("docker", 0.1),
            ("cloud", 0.1),
        ],
    },
    RoleProfile {
        name: "Frontend Developer",
        skills: &[
            ("javascript", 0.25),
            ("react", 0.25),
            ("html", 0.2),
            ("css", 0.2),
            ("typescript", 0.1),
        ],
    },
    RoleProfile {
        name: "Full Stack Developer",
        skills: &[
            ("javascript", 0.2),
            ("python", 0.2),
            ("react", 0.2),
            ("databases", 0.2),
            ("apis", 0.1),
            ("docker", 0.1),
        ],
    },
    RoleProfile {
        name: "Data Analyst",
        skills: &[
            ("sql", 0.3),
            ("excel", 0.2),
            ("statistics", 0.2),
            ("python", 0.2),
            ("data visualization", 0.1),
        ],
    },
    RoleProfile {
        name: "Data Scientist",
        skills: &[
            ("python", 0.3),
            ("machine learning", 0.25),
            ("statistics", 0.2),
            ("pandas", 0.15),
            ("sql", 0.1),
        ],
    },
    RoleProfile {
        name: "Machine Learning Engineer",
        skills: &[
            ("python", 0.25),
            ("machine learning", 0.25),
            ("tensorflow", 0.15),
            ("pytorch", 0.15),
            ("docker", 0.1),
            ("cloud", 0.1),
        ],
    },
    RoleProfile {
        name: "AI Engineer",
        skills: &[
            ("python", 0.3),
            ("deep learning", 0.25),
            ("nlp", 0.15),
            ("computer vision", 0.15),
            ("ml deployment", 0.15),
        ],
    },
    RoleProfile {
        name: "DevOps Engineer",
        skills: &[
            ("docker", 0.25),
            ("kubernetes", 0.25),
            ("ci/cd", 0.2),
            ("cloud", 0.2),
            ("linux", 0.1),
        ],
    },
];

/// Looks up a role by its exact catalog name (surrounding whitespace ignored).
pub fn find_role(name: &str) -> Result<&'static RoleProfile, AppError> {
    let name = name.trim();
    JOB_ROLES
        .iter()
        .find(|role| role.name == name)
        .ok_or_else(|| AppError::UnknownRole(name.to_string()))
}
