//! Fixed text pools the assembler draws from.
//!
//! `{kw}` marks where the escaped keyword is substituted and `{term}` where a
//! secondary keyword goes. Every heading in the pool is unique, so any prefix
//! of [`TOPICAL_SECTIONS`] yields distinct headings.

/// Maximum `<h3>` headings a topical section can carry.
pub const SUBSECTIONS_PER_SECTION: usize = 3;

pub struct Subsection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct TopicalSection {
    pub heading: &'static str,
    pub lead: &'static str,
    pub subsections: [Subsection; SUBSECTIONS_PER_SECTION],
}

pub const H1: &str = "{kw}: The Complete Expert Guide";

pub const INTRO: &str = "Understanding <strong>{kw}</strong> is essential for anyone who wants to make informed \
    decisions in a rapidly changing energy landscape. This guide collects practical insight, supporting data and \
    real-world examples so that you can evaluate {kw} with confidence, compare your options and plan the next step \
    for your home or business.";

/// Prepended when the introduction misses the keyword window.
pub const INTRO_LEAD: &str = "<strong>{kw}</strong> at a glance.";

pub const CONCLUSION_HEADING: &str = "Conclusion: Making Informed Decisions About {kw}";

pub const CONCLUSION: &[&str] = &[
    "Getting <strong>{kw}</strong> right means weighing technical specifications, long-term economics, \
     environmental impact and the practical details of installation. Each section of this guide covered one of those \
     pieces so that you can see how they fit together before you commit to a plan.",
    "The most reliable results come from careful planning, qualified professionals and a long-term perspective. \
     With the right approach, {kw} can deliver lasting value while supporting broader sustainability goals for your \
     household, your business and your community.",
];

pub const REFERENCES_HEADING: &str = "References and Citations";

/// Entries for the references list, cycled when more citations are configured.
pub const REFERENCES: &[&str] = &[
    "Industry Technical Standards for {kw}, Journal of Energy Systems",
    "National Standards Organization, {kw} Specifications and Guidelines",
    "Advanced Principles in Photovoltaic Science, Energy Research Quarterly",
    "Commercial Applications Report, Energy Industry Association",
    "Market Analysis and Return on Investment Studies, Renewable Energy Financial Review",
    "Professional Installation Standards Guide, National Installer Certification Board",
    "Global Market Forecast for {kw}, International Energy Agency",
    "Residential Energy Consumption Survey, U.S. Energy Information Administration",
    "Grid Integration Best Practices, National Renewable Energy Laboratory",
];

pub const SECONDARY_SENTENCES: &[&str] = &[
    "Many readers researching this topic also ask about <em>{term}</em>, which shares several of the same planning \
     considerations.",
    "It is also worth looking at <em>{term}</em>, since it often affects the final design and budget.",
    "Questions about <em>{term}</em> come up frequently during consultations and deserve a clear answer early on.",
    "Comparing options side by side makes the role of <em>{term}</em> much easier to judge.",
];

pub const TOPIC_TERMS: &str = "Related topics worth reviewing alongside {kw} include {terms}.";

pub const INTERNAL_LINK: &str = "For businesses weighing a larger project, visit our <a href=\"{href}\" \
    class=\"internal-link\">{anchor}</a> to explore options tailored to commercial properties.";

pub const EXTERNAL_LINK: &str = "For independent data and guidance, the <a href=\"{href}\" class=\"external-link\" \
    target=\"_blank\" rel=\"noopener noreferrer\">{anchor}</a> provides comprehensive and regularly updated resources.";

/// Short paragraphs that each mention the keyword exactly once.
pub const TAKEAWAYS: &[&str] = &[
    "Key takeaway: a well-planned approach to {kw} pays off over the full life of the system.",
    "Key takeaway: reliable numbers beat rough estimates when you evaluate {kw}.",
    "Key takeaway: qualified installers remove most of the risk associated with {kw}.",
    "Key takeaway: incentives change often, so confirm current programs before committing to {kw}.",
    "Key takeaway: monitoring performance is the simplest way to protect your investment in {kw}.",
];

/// Keyword-free supporting paragraphs used to reach the word-count floor.
pub const FILLER: &[&str] = &[
    "Before making any commitment, gather at least twelve months of utility bills. Seasonal swings in consumption \
     reveal far more about your real needs than a single month, and installers can use the full history to size \
     equipment accurately, estimate savings realistically and avoid paying for capacity you will never use.",
    "Local conditions matter as much as equipment quality. Roof orientation, shading from nearby trees or \
     buildings, typical cloud cover and even the age of the existing electrical panel all influence how a system \
     performs. A careful site visit captures these details and turns a generic quote into a dependable plan.",
    "Financing choices shape the long-term value of a project. Cash purchases usually deliver the highest lifetime \
     return, while loans spread the cost over time and leases or power purchase agreements lower the upfront \
     barrier. Comparing total cost over twenty years, not just the monthly payment, gives the clearest picture.",
    "Warranties deserve close attention. Equipment warranties cover defects in panels and inverters, performance \
     warranties guarantee a minimum output over time, and workmanship warranties protect against installation \
     errors. Knowing who honors each warranty, and for how long, prevents unpleasant surprises years later.",
    "Permitting and utility interconnection often take longer than the physical installation. Requirements vary \
     between jurisdictions, so an experienced installer who already knows the local inspectors and paperwork can \
     shorten the timeline considerably and keep the project moving without costly delays.",
    "Energy efficiency improvements multiply the benefit of any new generation source. Sealing air leaks, adding \
     insulation and replacing old appliances reduce demand, which means a smaller and less expensive system can \
     cover a larger share of your consumption while still leaving room for future growth.",
    "Storage is becoming a common addition to new projects. Batteries keep critical loads running during outages, \
     shift stored energy into expensive evening hours and reduce dependence on the grid. Whether storage makes \
     financial sense depends on local rates, outage frequency and the incentives available in your area.",
    "Documentation is easy to overlook but valuable at resale. Keeping records of permits, inspection reports, \
     warranty certificates and monitoring data shows prospective buyers that the system was installed properly \
     and has been maintained, which supports the property value and speeds up the sale.",
];

pub static TOPICAL_SECTIONS: [TopicalSection; 12] = [
    TopicalSection {
        heading: "What Is {kw}?",
        lead: "At its core, <strong>{kw}</strong> is a practical question about how modern energy systems are planned, \
               priced and operated. To understand why it matters, it helps to look at both the technical foundations \
               and the everyday decisions that depend on them.",
        subsections: [
            Subsection {
                heading: "Historical Context and Development",
                body: "Early installations were simple and expensive, but steady improvements in materials, manufacturing \
                       and measurement have transformed the field. Each generation of equipment has become more efficient, \
                       more reliable and easier to integrate with the rest of a building's electrical system.",
            },
            Subsection {
                heading: "Technical Specifications and Standards",
                body: "Industry standards define how equipment is tested, rated and installed. These specifications ensure \
                       consistency and interoperability between components from different manufacturers, and they give \
                       buyers a common language for comparing products on equal terms.",
            },
            Subsection {
                heading: "Key Terms You Should Know",
                body: "A handful of terms appear in almost every quote: rated capacity in kilowatts, annual production in \
                       kilowatt-hours, degradation rate, inverter efficiency and payback period. Understanding these terms \
                       makes it much easier to read proposals critically and ask the right follow-up questions.",
            },
        ],
    },
    TopicalSection {
        heading: "The Science Behind the Technology",
        lead: "Every system relies on a small set of physical principles. Knowing how they work explains why some designs \
               outperform others and why installation details have such a large effect on results.",
        subsections: [
            Subsection {
                heading: "Fundamental Principles",
                body: "Photovoltaic cells convert sunlight directly into electricity when photons free electrons inside a \
                       semiconductor. The resulting direct current is collected, conditioned and converted so that it can \
                       power ordinary appliances or flow back to the grid.",
            },
            Subsection {
                heading: "Mathematical Models and Calculations",
                body: "Engineers predict output with models that combine irradiance data, panel orientation, temperature \
                       coefficients and system losses. These calculations have become remarkably accurate and are the basis \
                       for the production estimates included in professional proposals.",
            },
            Subsection {
                heading: "Efficiency Factors",
                body: "Heat, shading, dust and wiring losses all reduce efficiency. Good designs minimize each of these \
                       factors by choosing suitable components, leaving space for airflow and routing cables carefully, \
                       which adds up to a meaningful gain over decades of operation.",
            },
        ],
    },
    TopicalSection {
        heading: "Real-World Applications and Use Cases",
        lead: "Practical applications span everything from a single rooftop to large commercial campuses. The right approach \
               depends on consumption patterns, available space and long-term goals.",
        subsections: [
            Subsection {
                heading: "Residential Applications",
                body: "For homeowners, the main goals are usually lower bills, greater independence from rate increases and \
                       a smaller environmental footprint. Residential systems are sized around household consumption and \
                       adapted to the roof, local climate and available budget.",
            },
            Subsection {
                heading: "Commercial and Industrial Implementation",
                body: "Larger installations bring additional complexity, including demand charges, three-phase electrical \
                       service and detailed monitoring requirements. They also offer economies of scale that can make the \
                       cost per watt considerably lower than in residential projects.",
            },
            Subsection {
                heading: "Community and Shared Projects",
                body: "Shared arrays let renters and owners of shaded properties participate by subscribing to a portion of \
                       a larger installation. Subscribers receive credits on their bills without installing any equipment \
                       at their own address.",
            },
        ],
    },
    TopicalSection {
        heading: "Cost Analysis and Economic Considerations",
        lead: "Understanding the economics of <strong>{kw}</strong> is essential for a sound investment decision. Upfront \
               cost is only one part of the picture; savings, incentives and maintenance complete it.",
        subsections: [
            Subsection {
                heading: "Initial Investment Requirements",
                body: "Upfront costs vary with system size, component quality, installation complexity and location. While \
                       the initial outlay can look substantial, it should always be compared against the expected \
                       production and the incentives that reduce the net price.",
            },
            Subsection {
                heading: "Long-Term Financial Benefits",
                body: "Over time, reduced utility bills, tax credits and higher property values deliver substantial returns. \
                       Many owners find that their systems pay for themselves within six to ten years and then continue \
                       producing low-cost energy for decades.",
            },
            Subsection {
                heading: "Incentives and Tax Credits",
                body: "Federal tax credits, state rebates, performance payments and net metering rules can change the \
                       economics dramatically. Because these programs evolve, it pays to confirm current terms before \
                       signing a contract.",
            },
        ],
    },
    TopicalSection {
        heading: "Environmental Impact and Sustainability",
        lead: "Clean generation offers a practical path toward lower emissions. Its benefits extend well beyond the property \
               where the equipment is installed.",
        subsections: [
            Subsection {
                heading: "Carbon Footprint Reduction",
                body: "A typical residential installation offsets several tons of carbon dioxide every year, roughly \
                       equivalent to planting dozens of trees or taking a car off the road. Commercial systems multiply \
                       that effect many times over.",
            },
            Subsection {
                heading: "Resource Conservation",
                body: "Generating electricity on site reduces dependence on finite fuels and avoids much of the water use and \
                       land disruption associated with conventional extraction and power production.",
            },
            Subsection {
                heading: "End-of-Life Recycling",
                body: "Panels last for decades, and recycling programs for glass, aluminum and silicon are expanding. Planning \
                       for responsible disposal closes the loop and keeps valuable materials in circulation.",
            },
        ],
    },
    TopicalSection {
        heading: "Installation Process and Best Practices",
        lead: "Proper installation determines how well a system performs and how long it lasts. The steps below describe what \
               a careful project looks like from the first visit to final inspection.",
        subsections: [
            Subsection {
                heading: "Pre-Installation Assessment",
                body: "A thorough assessment covers site measurements, structural capacity, the existing electrical panel, \
                       shading analysis and local permit requirements. Skipping any of these steps risks delays or a system \
                       that underperforms.",
            },
            Subsection {
                heading: "Professional Installation Standards",
                body: "Qualified installers follow electrical codes and manufacturer specifications, use proper flashing and \
                       mounting hardware and document every step. This discipline is what lets a system run safely for \
                       twenty-five years or more.",
            },
            Subsection {
                heading: "Inspection and Interconnection",
                body: "After installation, local inspectors verify code compliance and the utility approves the connection. \
                       Only then is the system switched on and allowed to export energy to the grid.",
            },
        ],
    },
    TopicalSection {
        heading: "Maintenance and Optimization",
        lead: "Modern systems need little attention, but regular care keeps them at peak performance and extends their \
               lifespan.",
        subsections: [
            Subsection {
                heading: "Routine Maintenance Tasks",
                body: "Typical tasks include periodic visual inspections, occasional cleaning in dusty climates and checking \
                       that monitoring data matches expectations. Addressing small issues promptly prevents larger repairs.",
            },
            Subsection {
                heading: "Performance Optimization Strategies",
                body: "Adjusting settings for seasonal changes, upgrading inverters as technology improves and pairing \
                       generation with efficient appliances all raise the value delivered by an existing installation.",
            },
            Subsection {
                heading: "Remote Monitoring Tools",
                body: "Online dashboards show production in real time and alert owners to faults. Reviewing these reports \
                       monthly is the easiest way to spot a failing component before it affects savings.",
            },
        ],
    },
    TopicalSection {
        heading: "Future Trends and Innovations",
        lead: "The field continues to evolve quickly. Following the main trends helps owners make decisions that stay relevant \
               for years.",
        subsections: [
            Subsection {
                heading: "Emerging Technologies",
                body: "Bifacial panels, tandem cells and building-integrated products are pushing efficiency higher and \
                       opening new places to generate electricity, from facades to parking structures.",
            },
            Subsection {
                heading: "Market Projections",
                body: "Analysts expect strong growth to continue as costs fall and adoption accelerates. Wider deployment in \
                       turn drives further cost reductions, reinforcing the trend.",
            },
            Subsection {
                heading: "Smart Grid Integration",
                body: "Utilities increasingly reward flexible customers. Systems that combine generation, storage and smart \
                       controls can respond to grid signals and earn additional value in the process.",
            },
        ],
    },
    TopicalSection {
        heading: "Common Challenges and Solutions",
        lead: "Every project encounters obstacles, but well-established solutions exist for nearly all of them.",
        subsections: [
            Subsection {
                heading: "Technical Challenges",
                body: "Integration issues, compatibility questions and performance variation under different conditions are \
                       the most common technical concerns. Quality components and experienced designers resolve most of them.",
            },
            Subsection {
                heading: "Financial and Regulatory Obstacles",
                body: "Financing paperwork and regulatory requirements can feel overwhelming. Reputable installers and \
                       local energy offices help owners understand their options and claim the benefits they qualify for.",
            },
            Subsection {
                heading: "Weather and Climate Concerns",
                body: "Modern equipment is rated for hail, high winds and heavy snow loads. Proper mounting and regular \
                       inspections keep systems productive in harsh climates.",
            },
        ],
    },
    TopicalSection {
        heading: "Choosing the Right Provider",
        lead: "The installer you choose has as much influence on the outcome as the equipment itself.",
        subsections: [
            Subsection {
                heading: "Credentials and Certifications",
                body: "Look for licensed electricians, recognized industry certifications and proof of insurance. These \
                       credentials indicate that the team has the training to complete the work safely.",
            },
            Subsection {
                heading: "Comparing Quotes",
                body: "Compare proposals on price per watt, expected production, equipment brands and warranty terms rather \
                       than the headline price alone.",
            },
            Subsection {
                heading: "Questions to Ask Before Signing",
                body: "Ask who performs the installation, how long the project will take, who handles permits and what \
                       happens if production falls short of the estimate.",
            },
        ],
    },
    TopicalSection {
        heading: "Frequently Asked Questions",
        lead: "The questions below come up in almost every consultation.",
        subsections: [
            Subsection {
                heading: "How Long Does a Typical System Last?",
                body: "Most panels carry performance warranties of twenty-five years and often keep working well beyond that. \
                       Inverters usually need replacement once during the life of the system.",
            },
            Subsection {
                heading: "Does Generation Stop on Cloudy Days?",
                body: "Production drops under heavy cloud cover but does not stop entirely. Annual estimates already account \
                       for local weather patterns.",
            },
            Subsection {
                heading: "Can a System Be Expanded Later?",
                body: "Expansion is usually possible if the original design leaves room on the roof and in the electrical \
                       panel. Mentioning future plans during the initial design keeps that option open.",
            },
        ],
    },
    TopicalSection {
        heading: "Planning Your Next Steps",
        lead: "With the fundamentals in place, a few practical steps turn research into a working project.",
        subsections: [
            Subsection {
                heading: "Setting Clear Goals",
                body: "Decide whether the priority is the lowest bill, the fastest payback, backup power or the largest \
                       environmental benefit. Clear goals make every later decision simpler.",
            },
            Subsection {
                heading: "Building a Realistic Timeline",
                body: "From first consultation to switch-on, most residential projects take between one and three months. \
                       Commercial projects take longer because of engineering review and utility studies.",
            },
            Subsection {
                heading: "Measuring Success After Installation",
                body: "Compare monthly production and bills against the original proposal. Consistent tracking confirms \
                       that the system delivers what was promised and highlights issues early.",
            },
        ],
    },
];

/// Substitutes the (already escaped) keyword into a template.
pub fn fill(template: &str, keyword_html: &str) -> String {
    template.replace("{kw}", keyword_html)
}
