/// One portfolio project. Every record has the same flat shape; the list is
/// fixed at build time and `title` doubles as the display key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub short_description: &'static str,
    pub details: &'static str,
    pub tech_stack: &'static str,
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "E-Panchayat Management System",
        short_description: "Digital governance platform for rural public services.",
        details: "This project digitizes multiple village-level services such as \
                  certificate requests, grievance redressal, data management, and \
                  public announcements.",
        tech_stack: "HTML, CSS, JavaScript, Python, SQL",
    },
    ProjectRecord {
        title: "Virtual Jewellery Try-On System",
        short_description: "AI-powered AR-based try-on tool.",
        details: "Uses OpenCV and Flask to detect facial landmarks and overlay \
                  jewellery in real time.",
        tech_stack: "OpenCV, Flask, Python, JavaScript",
    },
    ProjectRecord {
        title: "Call Log Management System",
        short_description: "Complete CRM call logging solution.",
        details: "Includes call entry forms, customer issue tracking, CSV export, \
                  search filters, admin login, and analytics.",
        tech_stack: "PHP, MySQL, HTML, CSS",
    },
    ProjectRecord {
        title: "Movie Recommendation System",
        short_description: "ML-based content recommendation engine.",
        details: "Uses cosine similarity on movie metadata to compute top \
                  recommended movies.",
        tech_stack: "Python, pandas, NumPy, sklearn",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_list_is_non_empty() {
        assert!(!PROJECTS.is_empty());
    }

    #[test]
    fn project_titles_are_unique() {
        let titles: HashSet<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn project_list_matches_published_content() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "E-Panchayat Management System",
                "Virtual Jewellery Try-On System",
                "Call Log Management System",
                "Movie Recommendation System",
            ]
        );
    }

    #[test]
    fn every_record_has_displayable_fields() {
        for project in PROJECTS {
            assert!(!project.short_description.is_empty(), "{}", project.title);
            assert!(!project.details.is_empty(), "{}", project.title);
            assert!(!project.tech_stack.is_empty(), "{}", project.title);
        }
    }
}
