/// `(id, group)` for every concept, in render order.
pub(super) const NODES: &[(&str, u32)] = &[
	("Web development", 0),
	("Front End Developer", 1),
	("Back End", 2),
	("Basic Front End", 3),
	("Front End Frameworks", 3),
	("Testing", 3),
	("Backend Technologies", 4),
	("Data Base", 4),
	("HTML", 5),
	("CSS", 5),
	("JavaScript", 5),
	("Bootstrap", 6),
	("Angular", 6),
	("React", 6),
	("Ember.js", 6),
	("Vue.js", 6),
	("Backbone.js", 6),
	("Jasmine", 7),
	("Karma", 7),
	("Node.js/ Express.js", 8),
	("Python (Django)", 8),
	("Java", 8),
	("PHP", 8),
	("MySQL", 9),
	("MongoDB", 9),
	("Cassandra", 9),
	("Apache", 9),
	("Nginx", 9),
];

pub(super) const LINKS: &[(&str, &str)] = &[
	("Web development", "Front End Developer"),
	("Web development", "Back End"),
	("Front End Developer", "Basic Front End"),
	("Front End Developer", "Front End Frameworks"),
	("Front End Developer", "Testing"),
	("Back End", "Backend Technologies"),
	("Back End", "Data Base"),
	("Basic Front End", "HTML"),
	("Basic Front End", "CSS"),
	("Basic Front End", "JavaScript"),
	("Front End Frameworks", "Bootstrap"),
	("Front End Frameworks", "Angular"),
	("Front End Frameworks", "React"),
	("Front End Frameworks", "Ember.js"),
	("Front End Frameworks", "Vue.js"),
	("Front End Frameworks", "Backbone.js"),
	("Testing", "Jasmine"),
	("Testing", "Karma"),
	("Backend Technologies", "Node.js/ Express.js"),
	("Backend Technologies", "Python (Django)"),
	("Backend Technologies", "Java"),
	("Backend Technologies", "PHP"),
	("Data Base", "MySQL"),
	("Data Base", "MongoDB"),
	("Data Base", "Cassandra"),
	("Data Base", "Apache"),
	("Data Base", "Nginx"),
];
