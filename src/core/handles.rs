// Handle Management System: Safe bridge between Rust values and native addresses
//
// Native objects are known only by address. Rather than passing those
// addresses around, safe wrappers hold a generation-checked `Handle` that
// indexes into a registry; the address is looked up only at the foreign-call
// boundary. Releasing an entry bumps its slot generation, so any copy of the
// old handle fails with `StaleHandle` instead of forwarding a dangling
// pointer to the library.

use crate::core::error::{GraphBlasError, Result};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Index into a `HandleRegistry`, valid only for one generation of its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Whether releasing the native object is this side's job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Created through this binding; freed by it
    Owned,
    /// Library-owned singleton (built-in types); never freed here
    Borrowed,
}

/// A native object address tagged with its ownership
///
/// Two raw handles are the same object iff their addresses match.
#[derive(Debug, Clone, Copy)]
pub struct RawHandle {
    address: usize,
    ownership: Ownership,
}

impl RawHandle {
    pub fn owned(address: usize) -> Self {
        Self {
            address,
            ownership: Ownership::Owned,
        }
    }

    pub fn borrowed(address: usize) -> Self {
        Self {
            address,
            ownership: Ownership::Borrowed,
        }
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_null(&self) -> bool {
        self.address == 0
    }

    /// Reinterpret as a typed native pointer (`GrB_Matrix`, `GrB_Type`, ...)
    pub fn as_ptr<P>(&self) -> *mut P {
        self.address as *mut P
    }
}

impl PartialEq for RawHandle {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for RawHandle {}

struct Slot<T> {
    generation: u32,
    entry: Option<T>,
}

struct Slots<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

/// Generic generation-checked registry
pub struct HandleRegistry<T> {
    inner: Mutex<Slots<T>>,
}

impl<T: Clone> HandleRegistry<T> {
    /// Create a new handle registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Slots {
                slots: Vec::new(),
                free: Vec::new(),
                live: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slots<T>> {
        // Slot bookkeeping stays consistent across a panic, so poisoning is ignored
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new object and return its handle
    pub fn insert(&self, object: T) -> Handle {
        let mut inner = self.lock();
        inner.live += 1;

        if let Some(index) = inner.free.pop() {
            let slot = &mut inner.slots[index as usize];
            slot.entry = Some(object);
            let handle = Handle {
                index,
                generation: slot.generation,
            };
            log::trace!("Reused registry slot {:?}", handle);
            return handle;
        }

        let index = inner.slots.len() as u32;
        inner.slots.push(Slot {
            generation: 0,
            entry: Some(object),
        });
        log::trace!("Allocated registry slot {}", index);
        Handle {
            index,
            generation: 0,
        }
    }

    /// Look up the object behind a handle
    ///
    /// Returns `StaleHandle` if the entry was removed since the handle was issued.
    pub fn get(&self, handle: Handle) -> Result<T> {
        let inner = self.lock();
        match inner.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => {
                slot.entry.clone().ok_or(GraphBlasError::StaleHandle)
            }
            _ => Err(GraphBlasError::StaleHandle),
        }
    }

    /// Remove an object by its handle, invalidating every copy of the handle
    pub fn remove(&self, handle: Handle) -> Result<T> {
        let mut inner = self.lock();
        let slot = match inner.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation && slot.entry.is_some() => slot,
            _ => return Err(GraphBlasError::StaleHandle),
        };

        let entry = slot.entry.take();
        slot.generation = slot.generation.wrapping_add(1);
        inner.free.push(handle.index);
        inner.live -= 1;
        log::trace!("Released registry slot {:?}", handle);
        entry.ok_or(GraphBlasError::StaleHandle)
    }

    /// Check if a handle is valid
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    /// Invalidate every live handle, returning the released objects
    pub fn drain(&self) -> Vec<T> {
        let mut inner = self.lock();
        let mut released = Vec::with_capacity(inner.live);
        let mut freed = Vec::new();

        for (index, slot) in inner.slots.iter_mut().enumerate() {
            if let Some(entry) = slot.entry.take() {
                slot.generation = slot.generation.wrapping_add(1);
                released.push(entry);
                freed.push(index as u32);
            }
        }

        inner.free.extend(freed);
        inner.live = 0;
        released
    }

    /// Get the number of live handles
    pub fn len(&self) -> usize {
        self.lock().live
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> fmt::Debug for HandleRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandleRegistry({} live)", self.len())
    }
}
