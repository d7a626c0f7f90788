mod shortest_path;
