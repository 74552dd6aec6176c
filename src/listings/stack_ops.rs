// Bounded-stack reference listings
// Array-backed stacks with explicit overflow/underflow handling

use super::types::Language;

const CPP: &str = r#"#include <iostream>
using namespace std;

#define MAX_SIZE 100

class Stack {
private:
    int arr[MAX_SIZE];
    int top;

public:
    Stack() { top = -1; }

    bool isEmpty() { return top == -1; }

    bool isFull() { return top == MAX_SIZE - 1; }

    void push(int value) {
        if (isFull()) {
            cout << "Stack Overflow!" << endl;
            return;
        }
        arr[++top] = value;
        cout << "Pushed: " << value << endl;
    }

    int pop() {
        if (isEmpty()) {
            cout << "Stack Underflow!" << endl;
            return -1;
        }
        int value = arr[top--];
        cout << "Popped: " << value << endl;
        return value;
    }

    int peek() {
        if (isEmpty()) {
            cout << "Stack is empty!" << endl;
            return -1;
        }
        return arr[top];
    }

    int size() { return top + 1; }
};
"#;

const JAVA: &str = r#"public class StackArray {
    private int[] arr;
    private int top;
    private int capacity;

    public StackArray(int size) {
        arr = new int[size];
        capacity = size;
        top = -1;
    }

    public boolean isEmpty() {
        return top == -1;
    }

    public boolean isFull() {
        return top == capacity - 1;
    }

    public void push(int value) {
        if (isFull()) {
            System.out.println("Stack Overflow!");
            return;
        }
        arr[++top] = value;
        System.out.println("Pushed: " + value);
    }

    public int pop() {
        if (isEmpty()) {
            System.out.println("Stack Underflow!");
            return -1;
        }
        int value = arr[top--];
        System.out.println("Popped: " + value);
        return value;
    }

    public int peek() {
        if (isEmpty()) {
            System.out.println("Stack is empty!");
            return -1;
        }
        return arr[top];
    }

    public int size() {
        return top + 1;
    }
}
"#;

const PYTHON: &str = r#"class Stack:
    def __init__(self, max_size=100):
        self.arr = [None] * max_size
        self.top = -1
        self.max_size = max_size

    def is_empty(self):
        return self.top == -1

    def is_full(self):
        return self.top == self.max_size - 1

    def push(self, value):
        if self.is_full():
            print("Stack Overflow!")
            return
        self.top += 1
        self.arr[self.top] = value
        print(f"Pushed: {value}")

    def pop(self):
        if self.is_empty():
            print("Stack Underflow!")
            return None
        value = self.arr[self.top]
        self.top -= 1
        print(f"Popped: {value}")
        return value

    def peek(self):
        if self.is_empty():
            print("Stack is empty!")
            return None
        return self.arr[self.top]

    def size(self):
        return self.top + 1
"#;

const JAVASCRIPT: &str = r#"class Stack {
  constructor(maxSize = 100) {
    this.arr = new Array(maxSize);
    this.top = -1;
    this.maxSize = maxSize;
  }

  isEmpty() {
    return this.top === -1;
  }

  isFull() {
    return this.top === this.maxSize - 1;
  }

  push(value) {
    if (this.isFull()) {
      console.log("Stack Overflow!");
      return;
    }
    this.arr[++this.top] = value;
    console.log(`Pushed: ${value}`);
  }

  pop() {
    if (this.isEmpty()) {
      console.log("Stack Underflow!");
      return null;
    }
    const value = this.arr[this.top--];
    console.log(`Popped: ${value}`);
    return value;
  }

  peek() {
    if (this.isEmpty()) {
      console.log("Stack is empty!");
      return null;
    }
    return this.arr[this.top];
  }

  size() {
    return this.top + 1;
  }
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
