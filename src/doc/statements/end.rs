/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program
and return to the command prompt.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.
Typed without a line number, `END` leaves BASIC like `QUIT`.

## Example
```text
10 PRINT 1
20 END
30 PRINT 3
RUN
1
```

*/
