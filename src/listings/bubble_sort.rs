// Bubble sort reference listings

use super::types::Language;

const CPP: &str = r#"#include <iostream>
#include <vector>
using namespace std;

void bubbleSort(vector<int>& nums) {
    int n = nums.size();
    for (int pass = 0; pass < n - 1; pass++) {
        bool swapped = false;
        for (int i = 0; i < n - 1 - pass; i++) {
            if (nums[i] > nums[i + 1]) {
                swap(nums[i], nums[i + 1]);
                swapped = true;
            }
        }
        if (!swapped) break;
    }
}
"#;

const JAVA: &str = r#"public class BubbleSort {
    public static void sort(int[] nums) {
        int n = nums.length;
        for (int pass = 0; pass < n - 1; pass++) {
            boolean swapped = false;
            for (int i = 0; i < n - 1 - pass; i++) {
                if (nums[i] > nums[i + 1]) {
                    int tmp = nums[i];
                    nums[i] = nums[i + 1];
                    nums[i + 1] = tmp;
                    swapped = true;
                }
            }
            if (!swapped) break;
        }
    }
}
"#;

const PYTHON: &str = r#"def bubble_sort(nums):
    n = len(nums)
    for pass_index in range(n - 1):
        swapped = False
        for i in range(n - 1 - pass_index):
            if nums[i] > nums[i + 1]:
                nums[i], nums[i + 1] = nums[i + 1], nums[i]
                swapped = True
        if not swapped:
            break
    return nums
"#;

const JAVASCRIPT: &str = r#"function bubbleSort(nums) {
    const n = nums.length;
    for (let pass = 0; pass < n - 1; pass++) {
        let swapped = false;
        for (let i = 0; i < n - 1 - pass; i++) {
            if (nums[i] > nums[i + 1]) {
                [nums[i], nums[i + 1]] = [nums[i + 1], nums[i]];
                swapped = true;
            }
        }
        if (!swapped) break;
    }
    return nums;
}
"#;

pub(crate) fn source(language: Language) -> &'static str {
    match language {
        Language::Cpp => CPP,
        Language::Java => JAVA,
        Language::Python => PYTHON,
        Language::JavaScript => JAVASCRIPT,
    }
}
