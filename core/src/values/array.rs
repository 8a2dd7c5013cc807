//! Array values with copy-on-write tail slices.
//!
//! A tail slice (`a[i..]`) shares the backing [`EcoVec`] of its source and
//! only records a start offset. Any mutation first materialises a private
//! copy, so a write to one array is never visible through another.

use core::fmt;

use ecow::EcoVec;

use super::Value;
use crate::Vec;

#[derive(Clone, Default)]
pub struct ArrayValue {
    elements: EcoVec<Value>,
    /// Index into `elements` of this array's first element.
    start: usize,
}

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements[self.start..]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_slice().get(index)
    }

    /// Element at `index`, or `nil` past the end.
    pub fn entry(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or(Value::Nil)
    }

    /// Elements from `index` to the end as a new array.
    ///
    /// Returns an empty array when `index >= len`. The result shares storage
    /// with `self` until either side is written.
    pub fn tail(&self, index: usize) -> ArrayValue {
        if index >= self.len() {
            return ArrayValue::new();
        }
        ArrayValue {
            elements: self.elements.clone(),
            start: self.start + index,
        }
    }

    /// Whether `self` and `other` currently read from the same allocation.
    pub fn shares_storage_with(&self, other: &ArrayValue) -> bool {
        !self.elements.is_empty()
            && !other.elements.is_empty()
            && core::ptr::eq(self.elements.as_ptr(), other.elements.as_ptr())
    }

    /// Store `value` at `index`, padding with `nil` when writing past the end.
    pub fn set(&mut self, index: usize, value: Value) {
        let elements = self.unshare();
        while elements.len() <= index {
            elements.push(Value::Nil);
        }
        elements.make_mut()[index] = value;
    }

    pub fn push(&mut self, value: Value) {
        self.unshare().push(value);
    }

    /// Drop the offset so that `elements` holds exactly this array.
    ///
    /// `EcoVec` itself copies a shared buffer on the next write.
    fn unshare(&mut self) -> &mut EcoVec<Value> {
        if self.start != 0 {
            self.elements = EcoVec::from(self.as_slice());
            self.start = 0;
        }
        &mut self.elements
    }
}

impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Value> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ArrayValue {
            elements: iter.into_iter().collect(),
            start: 0,
        }
    }
}

impl From<Vec<Value>> for ArrayValue {
    fn from(elements: Vec<Value>) -> Self {
        ArrayValue {
            elements: EcoVec::from(elements),
            start: 0,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ArrayValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ArrayValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<Value> as serde::Deserialize>::deserialize(deserializer).map(ArrayValue::from)
    }
}
