use std::alloc::Layout;
use std::ptr::NonNull;

pub(super) type Link<T> = Option<NonNull<Node<T>>>;

pub(super) struct Node<T> {
    elem: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub(super) fn alloc(elem: T, next: Link<T>) -> NonNull<Self> {
        let layout = Layout::new::<Node<T>>();
        unsafe {
            let ptr = std::alloc::alloc(layout) as *mut Node<T>;
            if ptr.is_null() {
                std::alloc::handle_alloc_error(layout);
            }
            ptr.write(Self { elem, next });
            NonNull::new_unchecked(ptr)
        }
    }

    // cond: ptr came from `Node::alloc` and is not used afterwards
    unsafe fn dealloc(ptr: NonNull<Self>) {
        let layout = Layout::new::<Node<T>>();
        std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
    }

    // cond: ptr came from `Node::alloc` and is not used afterwards
    pub(super) unsafe fn consume(ptr: NonNull<Self>) -> (T, Link<T>) {
        let Node { elem, next } = ptr.as_ptr().read();
        Node::dealloc(ptr);
        (elem, next)
    }

    pub(super) fn elem(&self) -> &T {
        &self.elem
    }

    pub(super) fn elem_mut(&mut self) -> &mut T {
        &mut self.elem
    }

    pub(super) fn next(&self) -> Link<T> {
        self.next
    }

    pub(super) fn set_next(&mut self, next: Link<T>) {
        self.next = next;
    }
}

#[cfg(test)]
mod test {
    use super::Node;

    #[test]
    fn test_node_link() {
        let mut a = Node::alloc(String::from("a"), None);
        let b = Node::alloc(String::from("b"), None);

        unsafe {
            assert!(a.as_ref().next().is_none());
            a.as_mut().set_next(Some(b));
            assert_eq!(a.as_ref().next(), Some(b));

            a.as_mut().elem_mut().push('!');
            assert_eq!(a.as_ref().elem(), "a!");

            let (elem, next) = Node::consume(a);
            assert_eq!(elem, "a!");
            assert_eq!(next, Some(b));

            let (elem, next) = Node::consume(b);
            assert_eq!(elem, "b");
            assert!(next.is_none());
        }
    }

    #[test]
    fn test_node_zst() {
        let ptr = Node::alloc((), None);
        let ((), next) = unsafe { Node::consume(ptr) };
        assert!(next.is_none());
    }
}
