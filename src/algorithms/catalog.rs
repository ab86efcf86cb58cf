// Reference data shown alongside each algorithm

use super::AlgorithmId;

/// Best / average / worst time complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub time: TimeComplexity,
    pub space: &'static str,
    pub fun_fact: &'static str,
}

pub fn entry(algorithm: AlgorithmId) -> &'static CatalogEntry {
    match algorithm {
        AlgorithmId::BubbleSort => &BUBBLE_SORT,
        AlgorithmId::SelectionSort => &SELECTION_SORT,
        AlgorithmId::InsertionSort => &INSERTION_SORT,
        AlgorithmId::MergeSort => &MERGE_SORT,
        AlgorithmId::QuickSort => &QUICK_SORT,
        AlgorithmId::LinearSearch => &LINEAR_SEARCH,
        AlgorithmId::BinarySearch => &BINARY_SEARCH,
    }
}

const BUBBLE_SORT: CatalogEntry = CatalogEntry {
    name: "Bubble Sort",
    time: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    fun_fact: "Named \"bubble sort\" because the large elements bubble towards the end of the list, like air bubbles rising to the surface of water.",
};

const SELECTION_SORT: CatalogEntry = CatalogEntry {
    name: "Selection Sort",
    time: TimeComplexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    fun_fact: "Like picking the smallest apple from a pile again and again. It never makes more than n - 1 swaps.",
};

const INSERTION_SORT: CatalogEntry = CatalogEntry {
    name: "Insertion Sort",
    time: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    fun_fact: "This is how most people sort a hand of playing cards: one card at a time.",
};

const MERGE_SORT: CatalogEntry = CatalogEntry {
    name: "Merge Sort",
    time: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space: "O(n)",
    fun_fact: "Described by John von Neumann in 1945, merge sort is a divide-and-conquer algorithm that is guaranteed to be stable.",
};

const QUICK_SORT: CatalogEntry = CatalogEntry {
    name: "Quick Sort",
    time: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space: "O(log n)",
    fun_fact: "Despite its O(n²) worst case, quicksort is often faster in practice than other O(n log n) algorithms.",
};

const LINEAR_SEARCH: CatalogEntry = CatalogEntry {
    name: "Linear Search",
    time: TimeComplexity {
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
    },
    space: "O(1)",
    fun_fact: "The only search here that works on unsorted data: it checks every element one by one.",
};

const BINARY_SEARCH: CatalogEntry = CatalogEntry {
    name: "Binary Search",
    time: TimeComplexity {
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
    },
    space: "O(1)",
    fun_fact: "Like finding a word in a dictionary: open to the middle and throw away half of the pages each time.",
};
