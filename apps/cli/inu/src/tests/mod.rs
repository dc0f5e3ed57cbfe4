mod paste_ref;
