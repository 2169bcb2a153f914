//! Static page content. Slice order is display order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const HOME: Section = Section { id: "home", label: "Home" };
pub const ABOUT: Section = Section { id: "about", label: "About" };
pub const SKILLS: Section = Section { id: "skills", label: "Skills" };
pub const EXPERIENCE: Section = Section { id: "experience", label: "Experience" };
pub const PROJECTS: Section = Section { id: "projects", label: "Projects" };
pub const CONTACT: Section = Section { id: "contact", label: "Contact" };

/// Sections in the order they are laid out on the page.
pub const SECTIONS: [Section; 6] = [HOME, SKILLS, EXPERIENCE, PROJECTS, ABOUT, CONTACT];

/// Sections in the order the header lists them.
pub const NAV_ITEMS: [Section; 6] = [HOME, ABOUT, SKILLS, EXPERIENCE, PROJECTS, CONTACT];

pub fn find_section(href: &str) -> Option<&'static Section> {
    let id = href.strip_prefix('#')?;
    SECTIONS.iter().find(|section| section.id == id)
}

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub role: &'static str,
    pub specialty: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Suhan Ahmed",
    brand: "<Suhan.dev/>",
    role: "Software Developer",
    specialty: "Frontend Specialist",
    summary: "2.5+ years of experience crafting exceptional web applications with React, Next.js, and modern \
              technologies. Passionate about creating scalable solutions and delivering outstanding user experiences.",
    email: "suhanahmed647@gmail.com",
    phone: "+91 7204832004",
    location: "Karnataka, India",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    LinkedIn,
    GitHub,
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    pub fn is_download(&self) -> bool {
        matches!(self.kind, LinkKind::Resume)
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self.kind, LinkKind::LinkedIn | LinkKind::GitHub)
    }
}

pub const EMAIL_LINK: ContactLink = ContactLink {
    kind: LinkKind::Email,
    label: "Send Email",
    href: "mailto:suhanahmed647@gmail.com",
};
pub const LINKEDIN_LINK: ContactLink = ContactLink {
    kind: LinkKind::LinkedIn,
    label: "Connect on LinkedIn",
    href: "https://linkedin.com/in/suhan647",
};
pub const GITHUB_LINK: ContactLink = ContactLink {
    kind: LinkKind::GitHub,
    label: "View GitHub Profile",
    href: "https://github.com/suhan647",
};
pub const RESUME_LINK: ContactLink = ContactLink {
    kind: LinkKind::Resume,
    label: "Download Resume",
    href: "/assets/resume.pdf",
};

pub const CONTACT_LINKS: [ContactLink; 4] = [EMAIL_LINK, LINKEDIN_LINK, GITHUB_LINK, RESUME_LINK];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub target: f64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { target: 2.5, suffix: "+", label: "Years Experience" },
    Stat { target: 10.0, suffix: "+", label: "Projects Built" },
    Stat { target: 9.0, suffix: "+", label: "Technologies" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub logo: &'static str,
    pub level: u8,
    pub gradient: &'static str,
}

pub const SKILLS_LIST: [Skill; 9] = [
    Skill { name: "Next.js", logo: "/assets/tech-logos/nextjs.svg", level: 80, gradient: "indigo-purple" },
    Skill { name: "React.js", logo: "/assets/tech-logos/react.svg", level: 80, gradient: "blue-cyan" },
    Skill { name: "JavaScript", logo: "/assets/tech-logos/javascript.svg", level: 80, gradient: "yellow-orange" },
    Skill { name: "TypeScript", logo: "/assets/tech-logos/typescript.svg", level: 85, gradient: "blue-indigo" },
    Skill { name: "Redux Toolkit", logo: "/assets/tech-logos/redux.svg", level: 80, gradient: "purple-pink" },
    Skill { name: "Zustand", logo: "/assets/tech-logos/zustand.svg", level: 85, gradient: "emerald-teal" },
    Skill { name: "Material UI", logo: "/assets/tech-logos/materialui.svg", level: 80, gradient: "blue-purple" },
    Skill { name: "Tailwind CSS", logo: "/assets/tech-logos/tailwindcss.svg", level: 85, gradient: "cyan-blue" },
    Skill { name: "Node.js", logo: "/assets/tech-logos/nodejs.svg", level: 50, gradient: "green-emerald" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub employer: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "Software Engineer",
        employer: "Hbits",
        period: "Feb 2024 - Present",
        location: "Mumbai",
        description: "Leading frontend development initiatives and architecting scalable web applications using React and Next.js ecosystem.",
        achievements: &[
            "Improved application performance by 40% through code optimization",
            "Led frontend architecture decisions for 3 major projects",
            "Mentored 2 junior developers and conducted code reviews",
        ],
        technologies: &["Next.js", "React", "TypeScript", "Tailwind CSS"],
    },
    Experience {
        title: "Software Developer",
        employer: "Medisage",
        period: "Aug 2023 - Feb 2024",
        location: "Mumbai",
        description: "Developed user-centric features for healthcare platform with focus on real-time communication and content management.",
        achievements: &[
            "Increased user engagement by 60% with new interactive features",
            "Reduced page load times by 35% through optimization",
            "Implemented responsive design across all platform components",
        ],
        technologies: &["React", "Redux", "Material UI", "WebRTC"],
    },
    Experience {
        title: "Frontend Developer",
        employer: "Tech Q Ware Technologies",
        period: "Jun 2022 - Jul 2023",
        location: "Remote",
        description: "Built custom components and managed multiple client projects with focus on user experience and code maintainability.",
        achievements: &[
            "Successfully delivered 5+ projects on time and within budget",
            "Improved code reusability by 50% through component library",
            "Enhanced overall user experience across all projects",
        ],
        technologies: &["React", "JavaScript", "CSS3", "Firebase"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub highlights: &'static [&'static str],
    /// (metric name, display value)
    pub metrics: &'static [(&'static str, &'static str)],
}

pub const PROJECTS_LIST: [Project; 4] = [
    Project {
        title: "Real Estate Investment Platform",
        description: "Comprehensive platform for property listings and investment opportunities with advanced analytics dashboard and real-time market data.",
        tech: &["Next.js", "Tailwind CSS", "Stripe API", "Node"],
        image: "/assets/projects/hbits-website.png",
        highlights: &["10K+ active users", "Real-time data sync", "Mobile-first design"],
        metrics: &[("Users", "100K+"), ("Performance", "10%"), ("Satisfaction", "95%")],
    },
    Project {
        title: "Healthcare Communication Platform",
        description: "HIPAA-compliant medical platform enabling secure doctor-patient communication with multimedia support and case management.",
        tech: &["Next.ts", "Zustand", "Material UI", "Node.js"],
        image: "/assets/projects/medisage-website.png",
        highlights: &["HIPAA compliant", "Real-time messaging", "Secure file sharing"],
        metrics: &[("Users", "30K+"), ("Performance", "40%"), ("Satisfaction", "95%")],
    },
    Project {
        title: "Lead Management System (LMS)",
        description: "Sales Execution CRM & Marketing Automation Tool. It offers tools for lead generation, tracking, scoring, as well as features for sale execution and marketing analytics.",
        tech: &["Next.ts", "Stripe API", "Material-ui", "Tailwind css"],
        image: "/assets/projects/lms.png",
        highlights: &["Lead tracking", "Sales automation", "Marketing analytics"],
        metrics: &[
            ("Leads Tracked", "1K+ leads managed"),
            ("Automation Rate", "70% tasks auto-assigned"),
            ("Conversion Boost", "35% increase in lead conversion"),
        ],
    },
    Project {
        title: "Ops Portal",
        description: "A comprehensive operations dashboard for internal teams to manage customer data, investment records, and document workflows. It enables streamlined collaboration, secure document handling, and direct email communication from within the system.",
        tech: &["React", "TypeScript", "Chakra UI", "React Hook Form", "Yup"],
        image: "/assets/projects/ops-portal.png",
        highlights: &["Document automation", "Customer tracking", "Email integration"],
        metrics: &[
            ("Docs Processed", "25K+ documents managed"),
            ("Error Reduction", "60% fewer manual errors"),
            ("Ops Efficiency", "3x faster task handling"),
        ],
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate Software Developer currently pursuing my Bachelor's in Computer Applications at \
     Manipal University. With 2.5+ years of hands-on experience, I specialize in creating modern, \
     scalable web applications that deliver exceptional user experiences.",
    "My expertise spans the entire frontend development ecosystem, from React and Next.js to advanced \
     state management solutions. I'm committed to writing clean, maintainable code and staying at the \
     forefront of industry trends and best practices.",
    "What sets me apart is my ability to bridge the gap between technical excellence and business \
     objectives, ensuring every project I work on delivers real value to users and stakeholders.",
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "Bachelor of Computer Applications",
        school: "Manipal University",
        years: "2024",
    },
    Education {
        degree: "Diploma in CSE",
        school: "DACG Polytechnic",
        years: "2017-2020",
    },
];

pub struct SpokenLanguage {
    pub name: &'static str,
    pub fluency: &'static str,
    pub native: bool,
}

pub const LANGUAGES: [SpokenLanguage; 4] = [
    SpokenLanguage { name: "English", fluency: "Professional", native: false },
    SpokenLanguage { name: "Hindi", fluency: "Professional", native: false },
    SpokenLanguage { name: "Urdu", fluency: "Native", native: true },
    SpokenLanguage { name: "Kannada", fluency: "Native", native: true },
];

pub struct StatusItem {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const STATUS_ITEMS: [StatusItem; 3] = [
    StatusItem { label: "Availability", value: "Immediately", icon: "🟢" },
    StatusItem { label: "Work Type", value: "Full-time / Remote", icon: "💼" },
    StatusItem { label: "Experience", value: "2.5+ Years", icon: "⭐" },
];

pub struct Strength {
    pub name: &'static str,
    pub level: u8,
    pub gradient: &'static str,
}

pub const STRENGTHS: [Strength; 3] = [
    Strength { name: "Problem Solving", level: 95, gradient: "green-emerald" },
    Strength { name: "Team Collaboration", level: 90, gradient: "blue-cyan" },
    Strength { name: "Code Quality", level: 92, gradient: "purple-pink" },
];

pub const INTERESTS: [&str; 6] = [
    "Cricket",
    "Volleyball",
    "Travelling",
    "Exercise",
    "Tech Blogs",
    "Open Source",
];

/// Code glyph floating behind the about section. Exactly one of `left_pct` /
/// `right_pct` anchors it horizontally.
pub struct FloatingGlyph {
    pub text: &'static str,
    pub top_pct: u8,
    pub left_pct: Option<u8>,
    pub right_pct: Option<u8>,
    pub delay_secs: u8,
}

pub const FLOATING_GLYPHS: [FloatingGlyph; 5] = [
    FloatingGlyph { text: "{ }", top_pct: 10, left_pct: Some(10), right_pct: None, delay_secs: 0 },
    FloatingGlyph { text: "</div>", top_pct: 20, left_pct: None, right_pct: Some(15), delay_secs: 1 },
    FloatingGlyph { text: "const", top_pct: 60, left_pct: Some(5), right_pct: None, delay_secs: 2 },
    FloatingGlyph { text: "=>", top_pct: 70, left_pct: None, right_pct: Some(10), delay_secs: 3 },
    FloatingGlyph { text: "React", top_pct: 40, left_pct: Some(15), right_pct: None, delay_secs: 4 },
];

impl FloatingGlyph {
    pub fn style(&self, index: usize) -> String {
        let anchor = match (self.left_pct, self.right_pct) {
            (Some(left), _) => format!("left: {left}%;"),
            (None, Some(right)) => format!("right: {right}%;"),
            (None, None) => String::new(),
        };
        format!(
            "top: {}%; {anchor} animation-duration: {}s; animation-delay: {}s;",
            self.top_pct,
            6 + index,
            self.delay_secs
        )
    }
}

pub const FOOTER_NOTE: &str = "Built with Rust, Yew & WebAssembly";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<&str> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn every_nav_anchor_resolves_to_exactly_one_section() {
        for item in NAV_ITEMS {
            let href = item.href();
            let matches = SECTIONS
                .iter()
                .filter(|section| section.href() == href)
                .count();
            assert_eq!(matches, 1, "{href} should match one section");
            assert_eq!(find_section(&href), Some(&item));
        }
    }

    #[test]
    fn nav_covers_the_six_expected_anchors() {
        let anchors: Vec<String> = NAV_ITEMS.iter().map(Section::href).collect();
        assert_eq!(
            anchors,
            ["#home", "#about", "#skills", "#experience", "#projects", "#contact"]
        );
    }

    #[test]
    fn find_section_rejects_unknown_or_bare_ids() {
        assert_eq!(find_section("#blog"), None);
        assert_eq!(find_section("home"), None);
        assert_eq!(find_section(""), None);
        assert_eq!(find_section("#"), None);
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS_LIST.iter().all(|skill| skill.level <= 100));
        assert!(STRENGTHS.iter().all(|strength| strength.level <= 100));
    }

    #[test]
    fn records_carry_their_required_fields() {
        for experience in EXPERIENCES {
            assert!(!experience.title.is_empty());
            assert!(!experience.achievements.is_empty());
            assert!(!experience.technologies.is_empty());
        }
        for project in PROJECTS_LIST {
            assert!(!project.tech.is_empty());
            assert!(!project.highlights.is_empty());
            assert_eq!(project.metrics.len(), 3);
        }
    }

    #[test]
    fn contact_links_cover_mail_profiles_and_resume() {
        assert!(EMAIL_LINK.href.starts_with("mailto:"));
        assert!(RESUME_LINK.is_download());
        assert!(RESUME_LINK.href.starts_with('/'));
        assert!(LINKEDIN_LINK.opens_new_tab() && GITHUB_LINK.opens_new_tab());
        assert!(!EMAIL_LINK.opens_new_tab());
    }

    #[test]
    fn glyph_style_anchors_to_one_side() {
        assert_eq!(
            FLOATING_GLYPHS[1].style(1),
            "top: 20%; right: 15%; animation-duration: 7s; animation-delay: 1s;"
        );
    }
}
