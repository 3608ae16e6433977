//! Static topic catalog behind the informational tabs.

use std::fmt;
use std::str::FromStr;

/// Page tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
	/// Landing tab.
	#[default]
	Overview,
	/// Client-side technologies.
	Frontend,
	/// Servers and APIs.
	Backend,
	/// Storage.
	Databases,
	/// Roles and job search.
	Career,
	/// Interactive concept graph.
	Diagram,
}

impl Tab {
	/// Every tab, in display order.
	pub const ALL: [Tab; 6] = [
		Tab::Overview,
		Tab::Frontend,
		Tab::Backend,
		Tab::Databases,
		Tab::Career,
		Tab::Diagram,
	];

	/// Text shown on the tab trigger.
	pub fn label(self) -> &'static str {
		match self {
			Tab::Overview => "Overview",
			Tab::Frontend => "Frontend",
			Tab::Backend => "Backend",
			Tab::Databases => "Databases",
			Tab::Career => "Career",
			Tab::Diagram => "Diagram",
		}
	}

	/// Value used in the `tab` query parameter.
	pub fn slug(self) -> &'static str {
		match self {
			Tab::Overview => "overview",
			Tab::Frontend => "frontend",
			Tab::Backend => "backend",
			Tab::Databases => "databases",
			Tab::Career => "career",
			Tab::Diagram => "diagram",
		}
	}
}

impl fmt::Display for Tab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

/// Returned when a query parameter names no known tab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab `{0}`")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
	type Err = UnknownTab;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Tab::ALL
			.into_iter()
			.find(|tab| tab.slug().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownTab(s.to_string()))
	}
}

/// A bullet of the form `term: detail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
	/// Bold lead-in.
	pub term: &'static str,
	/// Text after the colon.
	pub detail: &'static str,
}

/// One piece of card body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
	/// Section heading.
	Heading(&'static str),
	/// Plain paragraph.
	Paragraph(&'static str),
	/// Bulleted `term: detail` list.
	Bullets(&'static [Entry]),
}

/// Content of one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicCard {
	/// Tab the card belongs to.
	pub tab: Tab,
	/// Card heading.
	pub title: &'static str,
	/// Body, in order.
	pub blocks: &'static [Block],
}

const fn entry(term: &'static str, detail: &'static str) -> Entry {
	Entry { term, detail }
}

static CATALOG: [TopicCard; 6] = [
	TopicCard {
		tab: Tab::Overview,
		title: "Full Stack Web Development Overview",
		blocks: &[Block::Paragraph(
			"Full stack web development encompasses both frontend and backend technologies, allowing developers to create complete web applications. It includes knowledge of frontend languages, backend languages, frameworks, and database management systems.",
		)],
	},
	TopicCard {
		tab: Tab::Frontend,
		title: "Frontend Development",
		blocks: &[
			Block::Heading("Frontend Languages"),
			Block::Bullets(&[
				entry(
					"HTML (HyperText Markup Language)",
					"The skeleton of web pages, used for structuring content.",
				),
				entry(
					"CSS (Cascading Style Sheets)",
					"Provides design and layout to web pages, simplifying the presentation.",
				),
				entry(
					"JavaScript",
					"Enables interactive and dynamic web pages, providing user interaction.",
				),
			]),
			Block::Heading("Frontend Frameworks"),
			Block::Bullets(&[
				entry(
					"React",
					"Simple to learn, ideal for building user interfaces, and widely used in the industry.",
				),
				entry(
					"Angular",
					"Based on TypeScript, offers two-way data binding, and is great for large-scale applications.",
				),
				entry(
					"Vue.js",
					"Flexible and popular for various design structures, with a gentle learning curve.",
				),
				entry(
					"Bootstrap",
					"A CSS framework for developing responsive and mobile-first websites.",
				),
				entry("Ember.js", "A framework for creating ambitious web applications."),
				entry(
					"Backbone.js",
					"Gives structure to web applications by providing models, views, collections, and events.",
				),
			]),
			Block::Heading("Testing"),
			Block::Bullets(&[
				entry(
					"Jasmine",
					"A behavior-driven development framework for testing JavaScript code.",
				),
				entry(
					"Karma",
					"A test runner that allows you to execute JavaScript code in multiple real browsers.",
				),
			]),
		],
	},
	TopicCard {
		tab: Tab::Backend,
		title: "Backend Development",
		blocks: &[
			Block::Heading("Backend Languages"),
			Block::Bullets(&[
				entry(
					"C#",
					"Stable and versatile, related frameworks make it an important choice for web and software development.",
				),
				entry(
					"GoLang",
					"Static language with simple syntax, great for creating stable and effective server-side functions.",
				),
				entry(
					"Java",
					"Versatile and used for various digital platforms, including mobile devices.",
				),
				entry(
					"JavaScript (Node.js)",
					"Easy to learn with simple syntax, allows for client-side validation.",
				),
				entry(
					"PHP",
					"Suitable for server-side functionality, with easy deployment tools and capabilities.",
				),
				entry(
					"Python",
					"Straightforward with simple syntax, supports several web development frameworks like Django and Flask.",
				),
				entry(
					"SQL",
					"Structured Query Language for server-side information from databases.",
				),
			]),
			Block::Heading("Backend Frameworks"),
			Block::Bullets(&[
				entry(
					"Django (Python)",
					"Ideal for database-driven applications, with a robust ORM.",
				),
				entry(
					"Express.js (Node.js)",
					"Perfect for JavaScript developers, used in popular applications like MySpace and Uber.",
				),
				entry(
					"Flask (Python)",
					"Allows for very customized projects, runs on a web server rather than a users browser.",
				),
			]),
		],
	},
	TopicCard {
		tab: Tab::Databases,
		title: "Database Management Systems",
		blocks: &[Block::Bullets(&[
			entry(
				"Oracle",
				"Effective object-relational DBMS for data warehousing and online transactions. Easy to recover data and deploy on public or private clouds.",
			),
			entry(
				"MySQL",
				"Open-source, reliable, and cost-effective RDBMS. High-speed data processing and easy integration with Apache.",
			),
			entry(
				"Microsoft SQL Server",
				"Efficient RDBMS for multi-user environments. Highly secure and consistent.",
			),
			entry(
				"MongoDB",
				"Cross-platform, open-source NoSQL database management system. Ideal for high-volume data storage and supports various programming languages.",
			),
			entry(
				"Cassandra",
				"A highly scalable, distributed NoSQL database designed to handle large amounts of structured data across multiple commodity servers.",
			),
		])],
	},
	TopicCard {
		tab: Tab::Career,
		title: "Career in Full Stack Development",
		blocks: &[
			Block::Heading("Skills Required"),
			Block::Paragraph(
				"Mastery in multiple frontend and backend languages, versatility in handling various technologies. The more languages and experience a person has, the more in-demand they become.",
			),
			Block::Heading("Responsibilities"),
			Block::Paragraph(
				"Developing functional databases, creating end-to-end web architecture, enhancing user experience, upgrading software, and staying updated with technical and consumer needs.",
			),
			Block::Heading("Opportunities"),
			Block::Paragraph(
				"Wide range of opportunities due to familiarity with multiple technologies and stacks like MERN (MongoDB, Express.js, React, Node.js) and MEAN (MongoDB, Express.js, Angular, Node.js).",
			),
			Block::Heading("Global Market Demand"),
			Block::Paragraph(
				"High demand in the technology-driven world, especially with the growth of social media platforms. The tech sector is projected to generate up to 65 million jobs by 2025.",
			),
		],
	},
	// The graph view supplies the body.
	TopicCard {
		tab: Tab::Diagram,
		title: "Interactive Web Development Diagram",
		blocks: &[],
	},
];

/// Card shown for `tab`.
pub fn card(tab: Tab) -> &'static TopicCard {
	// CATALOG is ordered like Tab::ALL.
	&CATALOG[tab as usize]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_parse_back() {
		for tab in Tab::ALL {
			assert_eq!(tab.slug().parse::<Tab>(), Ok(tab));
			assert_eq!(tab.to_string(), tab.slug());
		}
		assert_eq!(" Career ".parse::<Tab>(), Ok(Tab::Career));
		assert_eq!("DIAGRAM".parse::<Tab>(), Ok(Tab::Diagram));
	}

	#[test]
	fn unknown_slug_is_an_error() {
		let err = "graphql".parse::<Tab>().unwrap_err();
		assert_eq!(err, UnknownTab("graphql".to_string()));
		assert_eq!(err.to_string(), "unknown tab `graphql`");
	}

	#[test]
	fn catalog_follows_tab_order() {
		for tab in Tab::ALL {
			assert_eq!(card(tab).tab, tab);
		}
	}

	#[test]
	fn informational_cards_have_content() {
		for tab in Tab::ALL.into_iter().filter(|t| *t != Tab::Diagram) {
			let card = card(tab);
			assert!(!card.title.is_empty());
			assert!(!card.blocks.is_empty(), "{tab} has no blocks");
		}
		assert!(card(Tab::Diagram).blocks.is_empty());
	}

	#[test]
	fn frontend_lists_every_framework_in_the_graph() {
		let terms: Vec<&str> = card(Tab::Frontend)
			.blocks
			.iter()
			.filter_map(|block| match block {
				Block::Bullets(entries) => Some(entries.iter().map(|e| e.term)),
				_ => None,
			})
			.flatten()
			.collect();
		for framework in ["Bootstrap", "Angular", "React", "Ember.js", "Vue.js", "Backbone.js"] {
			assert!(terms.contains(&framework), "missing {framework}");
		}
	}
}
