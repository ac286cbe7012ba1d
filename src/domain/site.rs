//! Static marketing content: navigation, footer, stats and page sections.

pub const SITE_NAME: &str = "Suncrest";
pub const SITE_TAGLINE: &str = "Finance";
pub const COPYRIGHT: &str = "© 2025 Suncrest Finance. All rights reserved.";

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAVIGATION: [Link; 5] = [
    Link {
        label: "Home",
        href: "/",
    },
    Link {
        label: "Services",
        href: "/services",
    },
    Link {
        label: "About",
        href: "/about",
    },
    Link {
        label: "Blogs",
        href: "/blogs",
    },
    Link {
        label: "Contact",
        href: "/contact",
    },
];

/// Primary call to action shown at the end of the navbar.
pub const NAV_CTA: Link = Link {
    label: "Book Consultation",
    href: "/contact#appointment-booking",
};

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub network: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub about: &'static str,
    pub quick_links: &'static [Link],
    pub service_links: &'static [Link],
    pub socials: &'static [SocialLink],
    pub address_lines: &'static [&'static str],
    pub phone: &'static str,
    pub email: &'static str,
    pub legal_links: &'static [&'static str],
}

pub static FOOTER: Footer = Footer {
    about: "Your trusted partner for comprehensive financial consulting services. We help \
            individuals and businesses achieve their financial goals through expert guidance \
            and personalized solutions.",
    quick_links: &[
        Link {
            label: "Home",
            href: "/",
        },
        Link {
            label: "Services",
            href: "/services",
        },
        Link {
            label: "About Us",
            href: "/about",
        },
        Link {
            label: "Contact",
            href: "/contact",
        },
    ],
    service_links: &[
        Link {
            label: "Investment Services",
            href: "/services",
        },
        Link {
            label: "Taxation & Compliance Services",
            href: "/services",
        },
        Link {
            label: "Insurance Services",
            href: "/services",
        },
        Link {
            label: "Financial Advisory & Consulting",
            href: "/services",
        },
        Link {
            label: "Capital Market & Trading Services",
            href: "/services",
        },
    ],
    socials: &[
        SocialLink {
            network: "Facebook",
            href: "https://www.facebook.com/share/18WQYAPgUg/",
        },
        SocialLink {
            network: "LinkedIn",
            href: "https://www.linkedin.com/company/suncreast-financials/",
        },
        SocialLink {
            network: "Instagram",
            href: "https://www.instagram.com/suncreastfinancials",
        },
        SocialLink {
            network: "X",
            href: "https://x.com/Suncreastfins",
        },
    ],
    address_lines: &["Dhole Patil Road", "Pune City 411001"],
    phone: "+91 70208 88144",
    email: "contact@suncreastfinancials.com",
    legal_links: &["Privacy Policy", "Terms of Service", "Cookie Policy"],
};

/// An animated counter; the browser counts from zero to `end` over `duration_ms`.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub end: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub duration_ms: u32,
    pub label: &'static str,
}

impl Stat {
    /// The settled value, rendered server-side so the counter reads correctly without scripts.
    pub fn display(&self) -> String {
        format!("{}{}{}", self.prefix, self.end, self.suffix)
    }
}

pub static STATS: [Stat; 3] = [
    Stat {
        end: 450,
        prefix: "",
        suffix: "+",
        duration_ms: 3500,
        label: "Happy Clients",
    },
    Stat {
        end: 100,
        prefix: "₹",
        suffix: "Cr+",
        duration_ms: 2000,
        label: "Assets Managed",
    },
    Stat {
        end: 8,
        prefix: "",
        suffix: "+",
        duration_ms: 1000,
        label: "Years Experience",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub static HOME_SERVICES: [Feature; 6] = [
    Feature {
        title: "Investment Planning",
        description: "Strategic investment solutions tailored to your risk tolerance and financial goals.",
    },
    Feature {
        title: "Risk Management",
        description: "Comprehensive protection strategies to safeguard your financial future.",
    },
    Feature {
        title: "Retirement Planning",
        description: "Secure your golden years with personalized retirement planning strategies.",
    },
    Feature {
        title: "Tax Optimization",
        description: "Minimize tax liability while maximizing your financial opportunities.",
    },
    Feature {
        title: "Business Finance",
        description: "Strategic financial guidance to help your business thrive and grow.",
    },
    Feature {
        title: "Estate Planning",
        description: "Preserve and transfer your wealth according to your wishes.",
    },
];

pub static WHY_CHOOSE_US: [Feature; 4] = [
    Feature {
        title: "Expert Guidance",
        description: "Certified financial advisors with decades of combined experience in wealth management.",
    },
    Feature {
        title: "Personalized Solutions",
        description: "Tailored financial strategies that align with your unique goals and circumstances.",
    },
    Feature {
        title: "Transparent Approach",
        description: "Clear communication, no hidden fees, and complete transparency in all our services.",
    },
    Feature {
        title: "Proven Track Record",
        description: "Consistent results and satisfied clients who trust us with their financial future.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Small Business Owner",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=200",
        content: "Suncrest Finance transformed my business finances. Their expert advice helped me \
                  increase profitability by 40% in just one year.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Retired Engineer",
        image: "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg?auto=compress&cs=tinysrgb&w=200",
        content: "Thanks to their retirement planning, I'm now enjoying a comfortable retirement \
                  with peace of mind about my financial security.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Marketing Executive",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=200",
        content: "Professional, knowledgeable, and truly caring. They helped me achieve my \
                  investment goals faster than I ever imagined.",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    /// Palette name used for the icon tint and button colour.
    pub accent: &'static str,
}

pub static SERVICES: [Service; 5] = [
    Service {
        title: "Investment Services",
        description: "These services help individuals and businesses grow wealth through stocks, \
                      mutual funds, bonds, and portfolio management.",
        features: &[
            "Mutual Funds",
            "Stocks & Bonds",
            "Portfolio Management",
            "Private Equity & Venture Capital",
        ],
        image: "https://i.pinimg.com/736x/f2/35/55/f235557ca03e7022aa147630f862324f.jpg",
        accent: "secondary",
    },
    Service {
        title: "Taxation & Compliance Services",
        description: "Ensures legal financial operations by handling tax filing, auditing, \
                      payroll, and corporate compliance requirements.",
        features: &[
            "Tax-Loss Harvesting",
            "Retirement Account Strategies",
            "Business Tax Planning",
            "Estate Tax Mitigation",
        ],
        image: "https://i.pinimg.com/1200x/89/29/58/89295826a1e7d4b34532f1df48f786bc.jpg",
        accent: "accent",
    },
    Service {
        title: "Insurance Services",
        description: "Insurance is the shield of financial security. It helps individuals, \
                      families, and businesses protect themselves against unexpected losses.",
        features: &[
            "Life Insurance",
            "Health Insurance",
            "Business & Liability Insurance",
            "General Insurance",
        ],
        image: "https://i.pinimg.com/736x/f2/82/ab/f282ab486399b0e926e1b8f742c03a65.jpg",
        accent: "primary",
    },
    Service {
        title: "Financial Advisory & Consulting",
        description: "Guides individuals and companies in wealth management, retirement \
                      planning, risk control, and business financial strategy.",
        features: &[
            "Retirement Planning",
            "Wealth Management",
            "Estate Planning",
            "Risk Management",
        ],
        image: "https://i.pinimg.com/736x/c9/72/35/c97235d3f1ffd9bb2ad45af665891083.jpg",
        accent: "secondary",
    },
    Service {
        title: "Capital Market & Trading Services",
        description: "Provides access to stock, forex, and commodity markets, enabling \
                      investment, trading, and fundraising opportunities.",
        features: &[
            "Stock Broking",
            "Commodity Trading",
            "Forex Trading",
            "Derivatives & Futures",
        ],
        image: "https://i.pinimg.com/736x/1f/9f/82/1f9f825beafaa037012dc100fa074de8.jpg",
        accent: "accent",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "We learn about your financial goals, current situation, and risk tolerance.",
    },
    ProcessStep {
        step: "02",
        title: "Analysis",
        description: "Our experts analyze your finances and identify opportunities for improvement.",
    },
    ProcessStep {
        step: "03",
        title: "Strategy",
        description: "We develop a personalized financial strategy tailored to your needs.",
    },
    ProcessStep {
        step: "04",
        title: "Implementation",
        description: "We help you implement the strategy and provide ongoing support.",
    },
];

pub static VALUES: [Feature; 4] = [
    Feature {
        title: "Excellence",
        description: "We strive for excellence in every aspect of our service, continuously \
                      improving our expertise and processes.",
    },
    Feature {
        title: "Client-Focused",
        description: "Our clients' success is our success. We put your needs first and build \
                      strategies around your goals.",
    },
    Feature {
        title: "Integrity",
        description: "We operate with complete transparency and honesty, ensuring you always \
                      understand our recommendations.",
    },
    Feature {
        title: "Compassion",
        description: "We understand that financial decisions can be stressful. We provide \
                      support with empathy and understanding.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub credentials: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub static TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Robert Johnson",
        role: "Founder & Senior Financial Advisor",
        credentials: "CFP®, CFA",
        image: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "20+ years of experience in financial planning and investment management. \
              Specializes in retirement and estate planning.",
    },
    TeamMember {
        name: "Jennifer Martinez",
        role: "Investment Strategist",
        credentials: "CFA, MBA",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "Expert in portfolio management and risk assessment. Former investment banker with \
              15 years of market experience.",
    },
    TeamMember {
        name: "David Chen",
        role: "Tax & Business Advisor",
        credentials: "CPA, CFP®",
        image: "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "Specializes in tax planning and business finance. Helps entrepreneurs and small \
              businesses optimize their financial strategies.",
    },
];

pub static ABOUT_STORY: [&str; 3] = [
    "Suncrest Finance was born from a simple mission: to make expert financial guidance \
     accessible to everyone. Our founders, seasoned financial professionals, recognized that \
     many people struggled to navigate the complex world of personal and business finance.",
    "What started as a small consulting practice has grown into a comprehensive financial \
     services firm, but our core values remain unchanged. We believe in building long-term \
     relationships with our clients, providing transparent advice, and helping people achieve \
     their financial dreams.",
    "Today we are proud to serve more than 450 clients and manage over ₹100 crore in assets. \
     Our success is measured not just in numbers, but in the peace of mind we bring to our \
     clients.",
];

#[derive(Debug, Clone, Copy)]
pub struct ContactCard {
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub accent: &'static str,
}

pub static CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard {
        title: "Visit Our Office",
        details: &["Dhole Patil Road", "Pune City 411001", "India"],
        accent: "primary",
    },
    ContactCard {
        title: "Call Us",
        details: &["+91 70208 88144", "Mon-Fri: 9AM-6PM IST"],
        accent: "secondary",
    },
    ContactCard {
        title: "Email Us",
        details: &[
            "contact@suncreastfinancials.com",
            "We respond within 24 hours",
        ],
        accent: "accent",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub static OFFICE_HOURS: [OfficeHours; 3] = [
    OfficeHours {
        days: "Monday - Friday",
        hours: "9:00 AM - 6:00 PM",
    },
    OfficeHours {
        days: "Saturday",
        hours: "10:00 AM - 2:00 PM",
    },
    OfficeHours {
        days: "Sunday",
        hours: "Closed",
    },
];
