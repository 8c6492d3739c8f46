//! Built-in data: the fixed topic list offered in the filter dropdown.

/// Common LeetCode topics. The filter itself accepts free text; this list
/// only feeds the form's dropdown, so the app stays useful without any
/// topic discovery call.
pub const AVAILABLE_TOPICS: &[&str] = &[
  "Array",
  "String",
  "Hash Table",
  "Dynamic Programming",
  "Math",
  "Sorting",
  "Greedy",
  "Depth-First Search",
  "Binary Search",
  "Database",
  "Breadth-First Search",
  "Tree",
  "Matrix",
  "Binary Tree",
  "Two Pointers",
  "Bit Manipulation",
  "Stack",
  "Heap",
  "Graph",
  "Linked List",
];
