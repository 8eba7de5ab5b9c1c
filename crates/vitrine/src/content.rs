//! Static page content in both locales.
//!
//! Flat lookup tables; nothing here is computed at runtime.

use crate::locale::Language;

/// A string in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    /// Spanish.
    pub es: &'static str,
    /// English.
    pub en: &'static str,
}

impl Text {
    /// Same string in both locales.
    #[must_use]
    pub const fn same(value: &'static str) -> Self {
        Self { es: value, en: value }
    }

    /// Picks the string for `language`.
    #[must_use]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.es,
            Language::En => self.en,
        }
    }
}

const fn text(es: &'static str, en: &'static str) -> Text {
    Text { es, en }
}

// =============================================================================
// PERSONAL
// =============================================================================

/// Owner of the site.
pub const NAME: &str = "Herasi Silva";
/// Professional title.
pub const TITLE: &str = "Full Stack Developer";
/// Contact email.
pub const EMAIL: &str = "herasidesweb@gmail.com";
/// Contact phone, international format.
pub const PHONE: &str = "+584145116337";
/// Location.
pub const LOCATION: &str = "Venezuela";
/// Site domain.
pub const WEBSITE: &str = "herasi.dev";
/// Navbar brand.
pub const BRAND: &str = "Herasi.dev";

// =============================================================================
// NAVBAR
// =============================================================================

/// A navbar link.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Section id.
    pub id: &'static str,
    /// In-page anchor.
    pub href: &'static str,
    /// Label.
    pub label: Text,
}

/// Navbar links in display order.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "about", href: "#about", label: text("Sobre Mí", "About") },
    NavItem { id: "techStack", href: "#tech-stack", label: text("Tecnologías", "Tech Stack") },
    NavItem { id: "projects", href: "#projects", label: text("Proyectos", "Projects") },
    NavItem { id: "services", href: "#services", label: text("Servicios", "Services") },
    NavItem { id: "contact", href: "#contact", label: text("Contacto", "Contact") },
];

// =============================================================================
// HERO
// =============================================================================

/// Hero headline.
pub const HERO_TITLE: Text = text("Desarrollador Full Stack", "Full Stack Developer");
/// Primary call to action.
pub const HERO_CTA: Text = text("Ver Proyectos", "View Projects");
/// Secondary call to action.
pub const HERO_SECONDARY: Text = text("Contáctame", "Contact Me");

static HERO_PHRASES_ES: [&str; 4] = [
    "Creo aplicaciones web modernas",
    "Desarrollo sistemas SaaS escalables",
    "Construyo APIs robustas y seguras",
    "Diseño experiencias de usuario únicas",
];

static HERO_PHRASES_EN: [&str; 4] = [
    "I build modern web applications",
    "I develop scalable SaaS systems",
    "I create robust and secure APIs",
    "I design unique user experiences",
];

/// Typewriter phrases for `language`.
#[must_use]
pub fn hero_phrases(language: Language) -> &'static [&'static str] {
    match language {
        Language::Es => &HERO_PHRASES_ES,
        Language::En => &HERO_PHRASES_EN,
    }
}

// =============================================================================
// ABOUT
// =============================================================================

/// About heading.
pub const ABOUT_TITLE: Text = text("Sobre Mí", "About Me");
/// About paragraph.
pub const ABOUT_DESCRIPTION: Text = text(
    "Creo aplicaciones web completas, desde la idea hasta el despliegue. Código limpio, interfaces intuitivas y sistemas que escalan. Si puedes imaginarlo, puedo crearlo.",
    "I create complete web applications, from idea to deployment. Clean code, intuitive interfaces, and systems that scale. If you can imagine it, I can create it.",
);
/// Favorite technologies heading.
pub const ABOUT_FAVORITES: Text = text("Tecnologías favoritas", "Favorite technologies");

/// What a metric card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    /// Fixed text.
    Label(&'static str),
    /// Counts up to this value, shown with a trailing `+`.
    Count(u32),
}

/// One metric card.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    /// Value.
    pub value: MetricValue,
    /// Caption.
    pub label: Text,
}

/// Metric cards in display order.
pub static METRICS: [Metric; 4] = [
    Metric { value: MetricValue::Label("SaaS"), label: text("en Producción", "in Production") },
    Metric { value: MetricValue::Count(15), label: text("Proyectos Completos", "Completed Projects") },
    Metric { value: MetricValue::Count(785), label: text("Commits GitHub", "GitHub Commits") },
    Metric { value: MetricValue::Count(10), label: text("Tecnologías", "Technologies") },
];

// =============================================================================
// TECH STACK
// =============================================================================

/// A technology badge.
#[derive(Debug, Clone, Copy)]
pub struct Tech {
    /// Display name.
    pub name: &'static str,
    /// Brand color, `0xRRGGBB`.
    pub color: u32,
}

const fn tech(name: &'static str, color: u32) -> Tech {
    Tech { name, color }
}

/// Tech stack heading.
pub const TECH_TITLE: Text = text("Tecnologías y Herramientas", "Technologies & Tools");
/// Tech stack subtitle.
pub const TECH_SUBTITLE: Text = text("Lo que uso para crear soluciones digitales", "What I use to create digital solutions");
/// First marquee label.
pub const TECH_FRONTEND_LABEL: Text = Text::same("Frontend");
/// Second marquee label.
pub const TECH_BACKEND_LABEL: Text = text("Backend / Base de Datos / Herramientas", "Backend / Database / Tools");

/// First marquee row.
pub static FRONTEND: [Tech; 9] = [
    tech("React", 0x61DAFB),
    tech("Next.js", 0xFFFFFF),
    tech("JavaScript", 0xF7DF1E),
    tech("TypeScript", 0x3178C6),
    tech("HTML5", 0xE34F26),
    tech("CSS3", 0x1572B6),
    tech("Tailwind", 0x06B6D4),
    tech("Sass", 0xCC6699),
    tech("GSAP", 0x88CE02),
];

/// Second marquee row.
pub static BACKEND: [Tech; 8] = [
    tech("Node.js", 0x339933),
    tech("PHP", 0x777BB4),
    tech("Python", 0x3776AB),
    tech("MongoDB", 0x47A248),
    tech("MySQL", 0x4479A1),
    tech("Git", 0xF05032),
    tech("Figma", 0xF24E1E),
    tech("WordPress", 0x21759B),
];

// =============================================================================
// PROJECTS
// =============================================================================

/// Project category, also the filter values besides "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Client work in production.
    Real,
    /// Course and practice work.
    Educational,
}

/// A project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    /// Stable id.
    pub id: &'static str,
    /// Title.
    pub name: Text,
    /// Category.
    pub category: Category,
    /// Technologies used.
    pub tech: &'static [&'static str],
    /// Source repository.
    pub github: Option<&'static str>,
    /// Live site.
    pub demo: Option<&'static str>,
}

/// Projects heading.
pub const PROJECTS_TITLE: Text = text("Mis Proyectos", "My Projects");
/// Projects subtitle.
pub const PROJECTS_SUBTITLE: Text = text(
    "Una selección de mi trabajo educativo y profesional",
    "A selection of my educational and professional work",
);
/// Card link label.
pub const PROJECTS_VIEW: Text = text("Ver Proyecto", "View Project");
/// "All" filter label.
pub const FILTER_ALL: Text = text("Todos", "All");
/// "Real" filter label.
pub const FILTER_REAL: Text = text("Reales", "Real");
/// "Educational" filter label.
pub const FILTER_EDUCATIONAL: Text = text("Educativos", "Educational");

/// Every project in display order.
pub static PROJECTS: [Project; 15] = [
    Project {
        id: "clone-youtube",
        name: text("Clone de YouTube", "YouTube Clone"),
        category: Category::Educational,
        tech: &["HTML", "CSS"],
        github: Some("https://github.com/Hersil23/cloneducativoyoutube"),
        demo: Some("https://hersil23.github.io/cloneducativoyoutube/"),
    },
    Project {
        id: "clone-netflix",
        name: text("Clone de Netflix", "Netflix Clone"),
        category: Category::Educational,
        tech: &["HTML", "CSS", "Sass"],
        github: Some("https://github.com/Hersil23/cloneducativoSASS"),
        demo: Some("https://hersil23.github.io/cloneducativoSASS/"),
    },
    Project {
        id: "clone-spotify",
        name: text("Clone de Spotify", "Spotify Clone"),
        category: Category::Educational,
        tech: &["HTML", "CSS", "Tailwind"],
        github: Some("https://github.com/Hersil23/ProyectoEducativoTailwind"),
        demo: Some("https://hersil23.github.io/ProyectoEducativoTailwind/"),
    },
    Project {
        id: "login-api",
        name: text("App Login y Favoritos", "Login & Favorites App"),
        category: Category::Educational,
        tech: &["HTML", "Tailwind", "JavaScript"],
        github: Some("https://github.com/Hersil23/Proyecto-final-JS"),
        demo: Some("https://hersil23.github.io/Proyecto-final-JS/"),
    },
    Project {
        id: "clima-app",
        name: text("App Clima Mundial", "World Weather App"),
        category: Category::Educational,
        tech: &["React", "API"],
        github: Some("https://github.com/Hersil23/ClimaMundial"),
        demo: Some("https://clima-app-three-phi.vercel.app/"),
    },
    Project {
        id: "portfolio-locutor",
        name: text("Portfolio de Locutor", "Voice Actor Portfolio"),
        category: Category::Educational,
        tech: &["HTML", "Tailwind", "JavaScript", "GSAP"],
        github: Some("https://github.com/Hersil23/Portfolio_locutor"),
        demo: Some("https://locutor.herasi.dev"),
    },
    Project {
        id: "pacigest",
        name: Text::same("PaciGest Plus"),
        category: Category::Real,
        tech: &["Next.js", "TypeScript", "Node.js", "MongoDB", "Email Automation"],
        github: None,
        demo: Some("https://pacigestplus.com"),
    },
    Project {
        id: "portfolio-frontend",
        name: text("Portfolio Frontend", "Frontend Portfolio"),
        category: Category::Real,
        tech: &["React", "Next.js", "Tailwind", "GSAP"],
        github: Some("https://github.com/Hersil23/Portfolio-dev-frontend"),
        demo: Some("https://front.herasi.dev"),
    },
    Project {
        id: "hersilshop",
        name: Text::same("HersilShop"),
        category: Category::Real,
        tech: &["PHP", "MySQL", "JavaScript"],
        github: None,
        demo: Some("https://twistpro.net"),
    },
    Project {
        id: "sistema-ventas",
        name: text("Sistema de Ventas", "Sales System"),
        category: Category::Real,
        tech: &["PHP", "MySQL", "JavaScript"],
        github: None,
        demo: Some("https://ventas.twistpro.net"),
    },
    Project {
        id: "sankalpa",
        name: Text::same("Sankalpa Ilumina"),
        category: Category::Real,
        tech: &["PHP", "MySQL", "JavaScript"],
        github: None,
        demo: Some("https://sankalpailumina.com"),
    },
    Project {
        id: "maxpro",
        name: Text::same("MaxPro Services"),
        category: Category::Real,
        tech: &["WordPress"],
        github: None,
        demo: Some("https://maxproservices.us"),
    },
    Project {
        id: "fabricacero",
        name: Text::same("Fabrica Cero"),
        category: Category::Real,
        tech: &["WordPress"],
        github: None,
        demo: Some("https://fabriacero.net"),
    },
    Project {
        id: "servilab",
        name: Text::same("Servilab CA"),
        category: Category::Real,
        tech: &["WordPress"],
        github: None,
        demo: Some("https://servilabca.com"),
    },
    Project {
        id: "nsmultiservices",
        name: Text::same("NS Multiservices"),
        category: Category::Real,
        tech: &["WordPress"],
        github: None,
        demo: Some("https://nsmultiservices.net"),
    },
];

// =============================================================================
// SERVICES
// =============================================================================

/// A service card.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    /// Stable id.
    pub id: &'static str,
    /// Title.
    pub title: Text,
    /// Price line.
    pub price: Text,
}

/// Services heading.
pub const SERVICES_TITLE: Text = text("Mis Servicios", "My Services");
/// Services subtitle.
pub const SERVICES_SUBTITLE: Text = text("Soluciones digitales para tu negocio", "Digital solutions for your business");
/// Quote button label.
pub const SERVICES_QUOTE: Text = text("Cotizar", "Get Quote");
/// Quote message template; `{title}` is replaced by the service title.
pub const SERVICES_MESSAGE: Text = text(
    "Hola, estoy interesado en el servicio de {title}. ¿Podrías darme más información?",
    "Hi, I'm interested in the {title} service. Could you give me more information?",
);

/// Service cards in display order.
pub static SERVICES: [Service; 8] = [
    Service { id: "landing", title: Text::same("Landing Page"), price: text("Desde $150", "From $150") },
    Service { id: "web", title: text("Desarrollo Web", "Web Development"), price: text("Desde $200", "From $200") },
    Service { id: "ecommerce", title: Text::same("E-commerce"), price: text("Desde $300", "From $300") },
    Service { id: "wordpress", title: Text::same("WordPress"), price: text("Desde $200", "From $200") },
    Service { id: "saas", title: text("Aplicaciones SaaS", "SaaS Applications"), price: text("Desde $500", "From $500") },
    Service { id: "automation", title: text("Automatizaciones", "Automations"), price: text("Desde $200", "From $200") },
    Service { id: "maintenance", title: text("Mantenimiento", "Maintenance"), price: text("$50/mes", "$50/month") },
    Service { id: "hosting", title: text("Dominio + Hosting", "Domain + Hosting"), price: text("Desde $40/año", "From $40/year") },
];

// =============================================================================
// CONTACT & FOOTER
// =============================================================================

/// A social link.
#[derive(Debug, Clone, Copy)]
pub struct Social {
    /// Network name.
    pub name: &'static str,
    /// Profile URL.
    pub url: &'static str,
}

/// Contact heading.
pub const CONTACT_TITLE: Text = text("Conectemos", "Let's Connect");
/// Contact subtitle.
pub const CONTACT_SUBTITLE: Text = text(
    "Estoy disponible para nuevos proyectos. ¡Contáctame!",
    "I'm available for new projects. Get in touch!",
);
/// Copy button confirmation.
pub const CONTACT_COPIED: Text = text("¡Copiado!", "Copied!");

/// Social links in display order.
pub static SOCIALS: [Social; 4] = [
    Social { name: "GitHub", url: "https://github.com/Hersil23" },
    Social { name: "Instagram", url: "https://www.instagram.com/herasi.dev" },
    Social { name: "TikTok", url: "https://www.tiktok.com/@herasi.dev" },
    Social { name: "WhatsApp", url: "https://wa.me/584145116337" },
];

/// Footer signature.
pub const FOOTER_COPYRIGHT: &str = "Herasi Silva • Full Stack Developer";
/// Footer rights line.
pub const FOOTER_RIGHTS: Text = text("Todos los derechos reservados", "All rights reserved");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lookup() {
        assert_eq!(HERO_TITLE.get(Language::Es), "Desarrollador Full Stack");
        assert_eq!(HERO_TITLE.get(Language::En), "Full Stack Developer");
        assert_eq!(TECH_FRONTEND_LABEL.get(Language::En), "Frontend");
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_counted_metrics() {
        let counts: Vec<u32> = METRICS
            .iter()
            .filter_map(|m| match m.value {
                MetricValue::Count(n) => Some(n),
                MetricValue::Label(_) => None,
            })
            .collect();
        assert_eq!(counts, vec![15, 785, 10]);
    }

    #[test]
    fn test_phrases_per_locale() {
        assert_eq!(hero_phrases(Language::Es).len(), hero_phrases(Language::En).len());
        assert_ne!(hero_phrases(Language::Es)[0], hero_phrases(Language::En)[0]);
    }
}
