pub mod instagram_graph;
