// Boyer-Moore voting reference listings

use super::types::Language;

const CPP: &str = r#"#include <iostream>
#include <vector>
using namespace std;

int findMajorityElement(vector<int>& nums) {
    int candidate = -1, count = 0;

    // Phase 1: Find Candidate
    for (int num : nums) {
        if (count == 0) {
            candidate = num;
            count = 1;
        } else if (num == candidate) count++;
        else count--;
    }

    // Phase 2: Verify Candidate
    int actualCount = 0;
    for (int num : nums) {
        if (num == candidate) actualCount++;
    }

    return (actualCount > nums.size() / 2) ? candidate : -1;
}
"#;

const JAVA: &str = r#"public class BoyerMoore {
    public static int findMajority(int[] nums) {
        int candidate = -1, count = 0;
        // Phase 1: Find Candidate
        for (int num : nums) {
            if (count == 0) {
                candidate = num;
                count = 1;
            } else if (num == candidate) count++;
            else count--;
        }
        // Phase 2: Verification
        int actualCount = 0;
        for (int n : nums) if (n == candidate) actualCount++;
        return actualCount > nums.length / 2 ? candidate : -1;
    }
}
"#;

const PYTHON: &str = r#"def boyer_moore(nums):
    candidate, count = None, 0
    # Phase 1
    for num in nums:
        if count == 0:
            candidate, count = num, 1
        elif num == candidate:
            count += 1
        else:
            count -= 1

    # Phase 2: Verification
    if nums.count(candidate) > len(nums) // 2:
        return candidate
    return -1
"#;

const JAVASCRIPT: &str = r#"function boyerMoore(nums) {
    let candidate = null, count = 0;
    // Phase 1
    for (let num of nums) {
        if (count === 0) { candidate = num; count = 1; }
        else if (num === candidate) count++;
        else count--;
    }
    // Phase 2
    const actualCount = nums.filter(x => x === candidate).length;
    return actualCount > nums.length / 2 ? candidate : -1;
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
