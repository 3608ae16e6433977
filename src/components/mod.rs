pub mod concept_diagram;
pub mod daily_tasks;
pub mod force_graph;
pub mod toast;
pub mod topic_card;
